//! Reaction entity - a user's single reaction on a post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{PostId, ReactionId, UserId};

/// Closed set of reaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Heart,
    Fire,
    Clap,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 4] = [Self::Like, Self::Heart, Self::Fire, Self::Clap];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Heart => "heart",
            Self::Fire => "fire",
            Self::Clap => "clap",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a reaction string is outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reaction kind: {0}")]
pub struct ReactionKindParseError(pub String);

impl std::str::FromStr for ReactionKind {
    type Err = ReactionKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "heart" => Ok(Self::Heart),
            "fire" => Ok(Self::Fire),
            "clap" => Ok(Self::Clap),
            other => Err(ReactionKindParseError(other.to_string())),
        }
    }
}

/// Reaction entity
///
/// At most one row exists per (post, user).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: ReactionId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    pub fn new(post_id: PostId, user_id: UserId, kind: ReactionKind) -> Self {
        Self {
            id: ReactionId::new(),
            post_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        for kind in ReactionKind::ALL {
            assert_eq!(kind.as_str().parse::<ReactionKind>().unwrap(), kind);
        }
        assert!("thumbs_up".parse::<ReactionKind>().is_err());
        assert!("LIKE".parse::<ReactionKind>().is_err());
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&ReactionKind::Clap).unwrap();
        assert_eq!(json, "\"clap\"");
    }
}
