//! Comment entity <-> model mapper

use blog_core::entities::{CommentAuthor, CommentRecord};
use blog_core::value_objects::{CommentId, PostId, UserId};

use crate::models::CommentModel;

/// Convert CommentModel to CommentRecord
impl From<CommentModel> for CommentRecord {
    fn from(model: CommentModel) -> Self {
        CommentRecord {
            id: CommentId::from_uuid(model.id),
            post_id: PostId::from_uuid(model.post_id),
            user_id: UserId::from_uuid(model.user_id),
            parent_id: model.parent_id.map(CommentId::from_uuid),
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
            author: CommentAuthor {
                name: model.author_name,
                avatar_url: model.author_avatar_url,
            },
        }
    }
}
