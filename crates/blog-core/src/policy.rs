//! Authorization guard
//!
//! Every mutation in the service layer names the [`Action`] it is about to
//! perform and asks the [`Caller`] to authorize it before any write happens.
//! Role capabilities come from [`Role::permissions`]; ownership rules are
//! carried by the action itself.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Permissions, Role, UserId};

/// The authenticated principal behind a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: UserId,
    pub role: Role,
}

/// A mutation that needs to be authorized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateCategory,
    UpdateCategory,
    DeleteCategory,
    CreatePost,
    /// Update, publish, unpublish or delete a post
    ModifyPost { author_id: UserId },
    LinkPostCategory,
    AddComment,
    DeleteComment { author_id: UserId },
    UploadMedia,
    DeleteMedia { owner_id: UserId },
    ToggleReaction,
}

impl Action {
    /// Permission that grants the action regardless of ownership
    pub const fn required_permission(&self) -> Permissions {
        match self {
            Self::CreateCategory | Self::UpdateCategory | Self::DeleteCategory => {
                Permissions::MANAGE_CATEGORIES
            }
            Self::CreatePost => Permissions::CREATE_POSTS,
            Self::ModifyPost { .. } => Permissions::MANAGE_ANY_POST,
            Self::LinkPostCategory => Permissions::LINK_CATEGORIES,
            Self::AddComment => Permissions::COMMENT,
            Self::DeleteComment { .. } => Permissions::MODERATE_COMMENTS,
            Self::UploadMedia => Permissions::UPLOAD_MEDIA,
            Self::DeleteMedia { .. } => Permissions::MANAGE_ANY_MEDIA,
            Self::ToggleReaction => Permissions::REACT,
        }
    }

    /// Owner of the target resource, for actions an owner may always perform
    pub const fn owner(&self) -> Option<UserId> {
        match self {
            Self::ModifyPost { author_id } | Self::DeleteComment { author_id } => Some(*author_id),
            Self::DeleteMedia { owner_id } => Some(*owner_id),
            _ => None,
        }
    }
}

impl Caller {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    #[inline]
    pub fn permissions(&self) -> Permissions {
        self.role.permissions()
    }

    /// Check whether the caller may perform `action`
    pub fn can(&self, action: &Action) -> bool {
        if action.owner() == Some(self.user_id) {
            return true;
        }
        self.permissions().has(action.required_permission())
    }

    /// Like [`Caller::can`], but fails with `Forbidden`
    pub fn authorize(&self, action: Action) -> Result<(), DomainError> {
        if self.can(&action) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(
                action.required_permission().to_string(),
            ))
        }
    }
}

/// Resolve an optional session into a caller, failing when nobody is signed in
pub fn require_caller(caller: Option<&Caller>) -> Result<&Caller, DomainError> {
    caller.ok_or(DomainError::Unauthenticated)
}
