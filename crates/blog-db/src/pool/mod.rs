//! Pool setup and schema migrations

mod migrate;
mod postgres;

pub use migrate::run_migrations;
pub use postgres::{create_pool, PoolSettings};
pub use sqlx::postgres::PgPool;
