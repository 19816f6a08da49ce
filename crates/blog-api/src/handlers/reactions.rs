//! Reaction handlers
//!
//! Counts are public; the viewer's own reaction is filled in when a
//! session token is sent along.

use axum::{extract::State, Json};
use blog_core::{PostId, ReactionCounts, ReactionKind};
use blog_service::dto::{BatchReactionsRequest, BatchReactionsResponse, ToggleReactionResponse};
use blog_service::ReactionService;

use crate::extractors::{ApiPath, OptionalAuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /posts/{post_id}/reactions
pub async fn get_reactions(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    ApiPath(post_id): ApiPath<PostId>,
) -> ApiResult<Json<ReactionCounts>> {
    let service = ReactionService::new(state.services());
    let counts = service.get_counts(post_id, viewer.caller()).await?;
    Ok(Json(counts))
}

/// POST /reactions/batch
pub async fn get_batch_reactions(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<BatchReactionsRequest>,
) -> ApiResult<Json<BatchReactionsResponse>> {
    let service = ReactionService::new(state.services());
    let counts = service.get_batch_counts(request, viewer.caller()).await?;
    Ok(Json(counts))
}

/// Toggle the caller's reaction
///
/// POST /posts/{post_id}/reactions/{kind}
pub async fn toggle_reaction(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ApiPath((post_id, kind)): ApiPath<(PostId, ReactionKind)>,
) -> ApiResult<Json<ToggleReactionResponse>> {
    let service = ReactionService::new(state.services());
    let response = service.toggle_reaction(auth.caller(), post_id, kind).await?;
    Ok(Json(response))
}
