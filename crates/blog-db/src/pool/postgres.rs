//! PostgreSQL connection pool

use std::time::Duration;

use blog_common::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};

/// Tuning knobs for the shared pool
///
/// Sizing comes from [`DatabaseConfig`]; timeouts are fixed.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl PoolSettings {
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
    const IDLE_TIMEOUT: Duration = Duration::from_secs(5 * 60);
    const MAX_LIFETIME: Duration = Duration::from_secs(30 * 60);

    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
    }
}

impl From<&DatabaseConfig> for PoolSettings {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
            min_connections: config.min_connections,
            acquire_timeout: Self::ACQUIRE_TIMEOUT,
            idle_timeout: Self::IDLE_TIMEOUT,
            max_lifetime: Self::MAX_LIFETIME,
        }
    }
}

/// Connect a new pool
#[instrument(skip_all, fields(max = settings.max_connections))]
pub async fn create_pool(settings: &PoolSettings) -> Result<PgPool, sqlx::Error> {
    let pool = settings.options().connect(&settings.url).await?;
    info!("Database pool ready");
    Ok(pool)
}
