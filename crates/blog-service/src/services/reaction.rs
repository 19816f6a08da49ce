//! Reaction service
//!
//! Reaction tallies for posts and the per-user toggle.

use blog_core::{
    compute_reaction_counts, compute_reaction_counts_batch, require_caller, Action, Caller,
    DomainError, PostId, ReactionCounts, ReactionKind,
};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{BatchReactionsRequest, BatchReactionsResponse, ToggleReactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Counts for one post, with the viewer's own reaction when signed in
    #[instrument(skip(self, viewer))]
    pub async fn get_counts(
        &self,
        post_id: PostId,
        viewer: Option<&Caller>,
    ) -> ServiceResult<ReactionCounts> {
        let reactions = self.ctx.reaction_repo().find_by_post(post_id).await?;
        Ok(compute_reaction_counts(
            &reactions,
            viewer.map(|c| c.user_id),
        ))
    }

    /// Counts for several posts at once; every requested post gets an entry
    #[instrument(skip(self, request, viewer), fields(posts = request.post_ids.len()))]
    pub async fn get_batch_counts(
        &self,
        request: BatchReactionsRequest,
        viewer: Option<&Caller>,
    ) -> ServiceResult<BatchReactionsResponse> {
        request.validate()?;

        let reactions = self
            .ctx
            .reaction_repo()
            .find_by_posts(&request.post_ids)
            .await?;

        let counts = compute_reaction_counts_batch(
            &reactions,
            &request.post_ids,
            viewer.map(|c| c.user_id),
        );

        Ok(BatchReactionsResponse { counts })
    }

    /// Toggle the caller's reaction on a post
    ///
    /// Same kind again removes it, a different kind replaces it, otherwise
    /// it is added. Fails before touching storage when nobody is signed in.
    #[instrument(skip(self, caller))]
    pub async fn toggle_reaction(
        &self,
        caller: Option<&Caller>,
        post_id: PostId,
        kind: ReactionKind,
    ) -> ServiceResult<ToggleReactionResponse> {
        let caller = require_caller(caller)?;
        caller.authorize(Action::ToggleReaction)?;

        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        let transition = self
            .ctx
            .reaction_repo()
            .toggle(post_id, caller.user_id, kind)
            .await?;
        let outcome = transition.outcome();

        info!(
            post_id = %post_id,
            user_id = %caller.user_id,
            ?transition,
            "Reaction toggled"
        );

        let reactions = self.ctx.reaction_repo().find_by_post(post_id).await?;
        let counts = compute_reaction_counts(&reactions, Some(caller.user_id));

        Ok(ToggleReactionResponse {
            action: outcome.action,
            kind: outcome.kind,
            counts,
        })
    }
}
