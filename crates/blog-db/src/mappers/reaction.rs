//! Reaction entity <-> model mapper

use blog_core::entities::Reaction;
use blog_core::error::DomainError;
use blog_core::value_objects::{PostId, ReactionId, UserId};

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
///
/// Fails on a kind outside the closed set instead of miscounting it.
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind = model
            .kind
            .parse()
            .map_err(|e| DomainError::DatabaseError(format!("reaction {}: {e}", model.id)))?;

        Ok(Reaction {
            id: ReactionId::from_uuid(model.id),
            post_id: PostId::from_uuid(model.post_id),
            user_id: UserId::from_uuid(model.user_id),
            kind,
            created_at: model.created_at,
        })
    }
}

/// Map a batch of rows, failing on the first malformed one
pub fn reactions_from_models(models: Vec<ReactionModel>) -> Result<Vec<Reaction>, DomainError> {
    models.into_iter().map(Reaction::try_from).collect()
}
