//! Post handlers
//!
//! Public listings plus the author-facing post lifecycle.

use axum::{
    extract::{Query, State},
    Json,
};
use blog_core::{CategoryId, PostId};
use blog_service::dto::{
    CreatePostRequest, PostListResponse, PostResponse, PublicPostResponse, UpdatePostRequest,
};
use blog_service::{CategoryService, PostService, PublicService, RECENT_POSTS_LIMIT};
use serde::Deserialize;

use crate::extractors::{ApiPath, AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<u32>,
}

/// List published posts
///
/// GET /posts?page&limit
pub async fn list_posts(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<PostListResponse>> {
    let service = PublicService::new(state.services());
    let posts = service.get_all_posts(pagination.into()).await?;
    Ok(Json(posts))
}

/// Latest published posts
///
/// GET /posts/recent?limit
pub async fn recent_posts(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> ApiResult<Json<Vec<PublicPostResponse>>> {
    let service = PublicService::new(state.services());
    let posts = service
        .get_recent_posts(params.limit.unwrap_or(RECENT_POSTS_LIMIT))
        .await?;
    Ok(Json(posts))
}

/// Published post by slug
///
/// GET /posts/slug/{slug}
pub async fn get_post_by_slug(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> ApiResult<Json<PublicPostResponse>> {
    let service = PublicService::new(state.services());
    let post = service.get_post_by_slug(&slug).await?;
    Ok(Json(post))
}

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<PostResponse>> {
    let service = PostService::new(state.services());
    let post = service.create_post(&caller, request).await?;
    Ok(Created(post))
}

/// Get a post for editing, drafts included
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(post_id): ApiPath<PostId>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.services());
    let post = service.get_post(&caller, post_id).await?;
    Ok(Json(post))
}

/// Update a post
///
/// PATCH /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(post_id): ApiPath<PostId>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.services());
    let post = service.update_post(&caller, post_id, request).await?;
    Ok(Json(post))
}

/// Delete a post
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(post_id): ApiPath<PostId>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.services());
    service.delete_post(&caller, post_id).await?;
    Ok(NoContent)
}

/// POST /posts/{post_id}/publish
pub async fn publish_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(post_id): ApiPath<PostId>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.services());
    let post = service.publish_post(&caller, post_id).await?;
    Ok(Json(post))
}

/// POST /posts/{post_id}/unpublish
pub async fn unpublish_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(post_id): ApiPath<PostId>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.services());
    let post = service.unpublish_post(&caller, post_id).await?;
    Ok(Json(post))
}

/// Attach a category to a post
///
/// PUT /posts/{post_id}/categories/{category_id}
pub async fn add_post_category(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath((post_id, category_id)): ApiPath<(PostId, CategoryId)>,
) -> ApiResult<NoContent> {
    let service = CategoryService::new(state.services());
    service
        .add_post_category(&caller, post_id, category_id)
        .await?;
    Ok(NoContent)
}

/// Detach a category from a post
///
/// DELETE /posts/{post_id}/categories/{category_id}
pub async fn remove_post_category(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath((post_id, category_id)): ApiPath<(PostId, CategoryId)>,
) -> ApiResult<NoContent> {
    let service = CategoryService::new(state.services());
    service
        .remove_post_category(&caller, post_id, category_id)
        .await?;
    Ok(NoContent)
}
