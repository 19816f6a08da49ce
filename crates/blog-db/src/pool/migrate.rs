//! Schema migrations shipped in this crate's `migrations/` directory

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::{info, instrument};

/// Location of the migration scripts, resolved at compile time
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply all pending migrations
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(Path::new(MIGRATIONS_DIR)).await?;
    info!(available = migrator.iter().count(), "Running database migrations");

    migrator.run(pool).await?;

    info!("Database migrations complete");
    Ok(())
}
