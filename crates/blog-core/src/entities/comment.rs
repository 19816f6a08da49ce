//! Comment entities - flat rows as stored and threaded nodes as rendered

use chrono::{DateTime, Utc};

use crate::value_objects::{CommentId, PostId, UserId};

/// Author fields denormalized onto each comment row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor {
    pub name: String,
    pub avatar_url: Option<String>,
}

/// A comment row as read from storage, joined with its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    /// `None` for top-level comments
    pub parent_id: Option<CommentId>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: CommentAuthor,
}

impl CommentRecord {
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A new comment, before it is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub parent_id: Option<CommentId>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(
        post_id: PostId,
        user_id: UserId,
        parent_id: Option<CommentId>,
        content: String,
    ) -> Self {
        Self {
            id: CommentId::new(),
            post_id,
            user_id,
            parent_id,
            content,
            created_at: Utc::now(),
        }
    }
}

/// A comment node in a thread, holding its replies in creation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub parent_id: Option<CommentId>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: CommentAuthor,
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Number of comments in this subtree, including this one
    pub fn thread_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.replies.iter());
        }
        count
    }
}

impl From<CommentRecord> for Comment {
    fn from(record: CommentRecord) -> Self {
        Self {
            id: record.id,
            post_id: record.post_id,
            user_id: record.user_id,
            parent_id: record.parent_id,
            content: record.content,
            created_at: record.created_at,
            updated_at: record.updated_at,
            author: record.author,
            replies: Vec::new(),
        }
    }
}
