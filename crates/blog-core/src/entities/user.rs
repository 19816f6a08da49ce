//! User entity - an account provisioned by the external auth provider

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, UserId};

/// User entity
///
/// Rows are written by the auth provider; the blog only reads them to
/// resolve author summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new reader account
    pub fn new(id: UserId, email: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            name,
            bio: None,
            avatar_url: None,
            role: Role::Reader,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style role override
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Public byline for this user
    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            id: self.id,
            name: self.name.clone(),
            bio: self.bio.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

/// Public byline shown next to posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: UserId,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}
