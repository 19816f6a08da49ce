//! Caller role, as asserted by the external auth provider

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Permissions;

/// Closed set of roles a user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Author,
    #[default]
    Reader,
}

impl Role {
    /// Permissions granted by this role
    pub const fn permissions(self) -> Permissions {
        match self {
            Self::Admin => Permissions::ADMIN,
            Self::Author => Permissions::AUTHOR,
            Self::Reader => Permissions::READER,
        }
    }

    /// Storage representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Author => "author",
            Self::Reader => "reader",
        }
    }

    #[inline]
    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }
}

/// Error when a role string is not one of the known roles
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "author" => Ok(Self::Author),
            "reader" => Ok(Self::Reader),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
