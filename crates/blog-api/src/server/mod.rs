//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use blog_common::{AppConfig, AppError, JwtService};
use blog_db::{
    create_pool, run_migrations, PoolSettings, PgCategoryRepository, PgCommentRepository, PgMediaRepository,
    PgPostRepository, PgReactionRepository, PgUserRepository,
};
use blog_service::{LocalMediaStore, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes get the plain stack; everything else is rate limited.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let api = apply_middleware_with_config(
        create_router(&config.storage),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    Router::new().merge(health).merge(api).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let pool = create_pool(&PoolSettings::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    if config.app.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.leeway_seconds);

    let media_store = Arc::new(LocalMediaStore::new(&config.storage.upload_dir));
    info!(upload_dir = %config.storage.upload_dir, "Local media store ready");

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .category_repo(Arc::new(PgCategoryRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .media_repo(Arc::new(PgMediaRepository::new(pool.clone())))
        .media_store(media_store)
        .site(config.site.clone())
        .storage(config.storage.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, jwt_service, pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
