//! Typed identifiers
//!
//! Every table in the blog schema is keyed by a UUID. Wrapping each one in its
//! own newtype keeps a `PostId` from ever being passed where a `CommentId` is
//! expected.

use std::fmt;

use uuid::Uuid;

/// Error when parsing an identifier from its string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid {0} id format")]
    InvalidFormat(&'static str),
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random id
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID
            #[inline]
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Get the inner UUID
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Parse from the hyphenated string representation
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat($label))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a user provisioned by the external auth provider
    UserId,
    "user"
);
define_id!(
    /// Identifier of a blog post
    PostId,
    "post"
);
define_id!(
    /// Identifier of a comment
    CommentId,
    "comment"
);
define_id!(
    /// Identifier of a category
    CategoryId,
    "category"
);
define_id!(
    /// Identifier of an uploaded media file
    MediaId,
    "media"
);
define_id!(ReactionId, "reaction");
