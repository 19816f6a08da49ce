//! Shared handler state

use std::sync::Arc;

use blog_common::{AppConfig, JwtService};
use blog_db::PgPool;
use blog_service::ServiceContext;

/// Everything a handler can reach through `State<AppState>`
///
/// Cloned per request, so the heavy parts sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    sessions: Arc<JwtService>,
    // Only the readiness probe talks to the pool directly
    pool: PgPool,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig, sessions: JwtService, pool: PgPool) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
            sessions: Arc::new(sessions),
            pool,
        }
    }

    /// Repositories and media store for the service layer
    pub fn services(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Verifier for bearer tokens minted by the auth provider
    pub fn sessions(&self) -> &JwtService {
        &self.sessions
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("services", &self.services)
            .field("site", &self.config.site.url)
            .finish_non_exhaustive()
    }
}
