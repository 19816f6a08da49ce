//! User entity <-> model mapper

use blog_core::entities::User;
use blog_core::value_objects::{Role, UserId};

use crate::models::UserModel;

/// Convert database role string to Role, treating unknown values as readers
pub(crate) fn parse_role(role: &str) -> Role {
    role.parse().unwrap_or_default()
}

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::from_uuid(model.id),
            email: model.email,
            name: model.name,
            bio: model.bio,
            avatar_url: model.avatar_url,
            role: parse_role(&model.role),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
