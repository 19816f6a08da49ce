//! Comment handlers
//!
//! Threads are returned as nested trees.

use axum::{extract::State, Json};
use blog_core::{CommentId, PostId};
use blog_service::dto::{CommentCountResponse, CommentResponse, CreateCommentRequest};
use blog_service::CommentService;

use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comment tree of a post
///
/// GET /posts/{post_id}/comments
pub async fn get_comments(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<PostId>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.services());
    Ok(Json(service.get_comments(post_id).await?))
}

/// GET /posts/{post_id}/comments/count
pub async fn count_comments(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<PostId>,
) -> ApiResult<Json<CommentCountResponse>> {
    let service = CommentService::new(state.services());
    Ok(Json(service.count_comments(post_id).await?))
}

/// Add a comment or a reply
///
/// POST /posts/{post_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(post_id): ApiPath<PostId>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<CommentResponse>> {
    let service = CommentService::new(state.services());
    let comment = service.add_comment(&caller, post_id, request).await?;
    Ok(Created(comment))
}

/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(comment_id): ApiPath<CommentId>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.services());
    service.delete_comment(&caller, comment_id).await?;
    Ok(NoContent)
}
