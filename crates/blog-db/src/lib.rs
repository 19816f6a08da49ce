//! # blog-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `blog-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_common::AppConfig;
//! use blog_core::traits::PostRepository;
//! use blog_db::{create_pool, run_migrations, PgPostRepository, PoolSettings};
//!
//! async fn example(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolSettings::from(&config.database)).await?;
//!     run_migrations(&pool).await?;
//!     let post_repo = PgPostRepository::new(pool);
//!
//!     let recent = post_repo.find_recent_published(6).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolSettings};
pub use repositories::{
    PgCategoryRepository, PgCommentRepository, PgMediaRepository, PgPostRepository,
    PgReactionRepository, PgUserRepository,
};
