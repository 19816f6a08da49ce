//! Route definitions
//!
//! JSON API under /api/v1, RSS feeds under /rss, uploaded files under /uploads.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
    Router,
};
use blog_common::StorageConfig;
use tower_http::services::ServeDir;

use crate::handlers::{categories, comments, feeds, health, media, posts, reactions, users};
use crate::state::AppState;

/// Room for multipart framing on top of the file itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Create the main router (health probes are exported separately)
pub fn create_router(storage: &StorageConfig) -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes(storage))
        .merge(feed_routes())
        .nest_service("/uploads", ServeDir::new(&storage.upload_dir))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(storage: &StorageConfig) -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(category_routes())
        .merge(comment_routes())
        .merge(reaction_routes())
        .merge(user_routes())
        .merge(media_routes(storage))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/recent", get(posts::recent_posts))
        .route("/posts/slug/:slug", get(posts::get_post_by_slug))
        .route(
            "/posts/:post_id",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/posts/:post_id/publish", post(posts::publish_post))
        .route("/posts/:post_id/unpublish", post(posts::unpublish_post))
        .route(
            "/posts/:post_id/categories/:category_id",
            put(posts::add_post_category).delete(posts::remove_post_category),
        )
}

/// Category routes
fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/:category_id",
            patch(categories::update_category).delete(categories::delete_category),
        )
        .route("/categories/slug/:slug/posts", get(categories::category_posts))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts/:post_id/comments",
            get(comments::get_comments).post(comments::add_comment),
        )
        .route("/posts/:post_id/comments/count", get(comments::count_comments))
        .route("/comments/:comment_id", delete(comments::delete_comment))
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id/reactions", get(reactions::get_reactions))
        .route("/posts/:post_id/reactions/:kind", post(reactions::toggle_reaction))
        .route("/reactions/batch", post(reactions::get_batch_reactions))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me/posts", get(users::get_my_posts))
        .route("/users/@me/media", get(users::get_my_media))
        .route("/users/:user_id/posts", get(users::get_author_posts))
}

/// Media routes
fn media_routes(storage: &StorageConfig) -> Router<AppState> {
    let body_limit = usize::try_from(storage.max_file_size_bytes())
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route(
            "/media",
            post(media::upload_media).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/media/:media_id", delete(media::delete_media))
}

/// RSS feed routes
fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/rss", get(feeds::site_feed))
        .route("/rss/category/:slug", get(feeds::category_feed))
        .route("/rss/author/:author_id", get(feeds::author_feed))
}
