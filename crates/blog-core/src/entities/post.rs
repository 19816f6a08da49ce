//! Post entity - an article with a draft/published lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AuthorSummary, CategorySummary};
use crate::value_objects::{PostId, UserId};

/// Publication state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(format!("unknown post status: {other}")),
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub slug: String,
    /// Rich-text HTML body
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new draft
    pub fn new(
        id: PostId,
        author_id: UserId,
        title: String,
        slug: String,
        content: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            slug,
            content,
            excerpt: None,
            featured_image: None,
            status: PostStatus::Draft,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Check if user is the author
    #[inline]
    pub fn is_author(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Mark as published, stamping `published_at` the first time
    pub fn publish(&mut self) {
        let now = Utc::now();
        self.status = PostStatus::Published;
        if self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }

    /// Move back to draft; `published_at` is kept for history
    pub fn unpublish(&mut self) {
        self.status = PostStatus::Draft;
        self.updated_at = Utc::now();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A published post as shown to readers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicPost {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub published_at: DateTime<Utc>,
    /// Minutes
    pub reading_time: u32,
    pub author: AuthorSummary,
    pub categories: Vec<CategorySummary>,
}

/// A page of public posts plus the total count for pagination
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostPage {
    pub posts: Vec<PublicPost>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Post {
        Post::new(
            PostId::new(),
            UserId::new(),
            "Hello".into(),
            "hello".into(),
            "<p>Hi</p>".into(),
        )
    }

    #[test]
    fn test_new_post_is_draft() {
        let post = draft();
        assert_eq!(post.status, PostStatus::Draft);
        assert!(post.published_at.is_none());
        assert!(!post.is_published());
    }

    #[test]
    fn test_publish_sets_published_at_once() {
        let mut post = draft();
        post.publish();
        assert!(post.is_published());
        let first = post.published_at;
        assert!(first.is_some());

        post.unpublish();
        assert_eq!(post.status, PostStatus::Draft);
        post.publish();
        assert_eq!(post.published_at, first);
    }

    #[test]
    fn test_is_author() {
        let post = draft();
        assert!(post.is_author(post.author_id));
        assert!(!post.is_author(UserId::new()));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("draft".parse::<PostStatus>().unwrap(), PostStatus::Draft);
        assert_eq!("published".parse::<PostStatus>().unwrap(), PostStatus::Published);
        assert!("archived".parse::<PostStatus>().is_err());
    }
}
