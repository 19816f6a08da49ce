//! User handlers
//!
//! The caller's own posts and media, and an author's public posts.

use axum::{extract::State, Json};
use blog_core::UserId;
use blog_service::dto::{AuthorPostsResponse, MediaResponse, PostResponse};
use blog_service::{MediaService, PostService, PublicService};

use crate::extractors::{ApiPath, AuthUser, Pagination};
use crate::response::ApiResult;
use crate::state::AppState;

/// The caller's posts, drafts included
///
/// GET /users/@me/posts
pub async fn get_my_posts(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.services());
    Ok(Json(service.get_my_posts(&caller).await?))
}

/// GET /users/@me/media
pub async fn get_my_media(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> ApiResult<Json<Vec<MediaResponse>>> {
    let service = MediaService::new(state.services());
    Ok(Json(service.get_my_media(&caller).await?))
}

/// Published posts by an author
///
/// GET /users/{user_id}/posts?page&limit
pub async fn get_author_posts(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
    pagination: Pagination,
) -> ApiResult<Json<AuthorPostsResponse>> {
    let service = PublicService::new(state.services());
    let posts = service
        .get_posts_by_author(user_id, pagination.into())
        .await?;
    Ok(Json(posts))
}
