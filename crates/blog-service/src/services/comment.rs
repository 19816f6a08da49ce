//! Comment service
//!
//! Adds, deletes and threads comments on posts.

use blog_core::{
    build_comment_tree, Action, Caller, CommentId, CommentRecord, DomainError, NewComment, PostId,
    MAX_THREAD_DEPTH,
};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{CommentCountResponse, CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment thread of a post
    ///
    /// Replies whose parent no longer exists are left out.
    #[instrument(skip(self))]
    pub async fn get_comments(&self, post_id: PostId) -> ServiceResult<Vec<CommentResponse>> {
        let records = self.ctx.comment_repo().find_by_post(post_id).await?;
        let total = records.len();

        let tree = build_comment_tree(records);
        debug!(post_id = %post_id, total, roots = tree.len(), "Built comment tree");

        Ok(tree.into_iter().map(CommentResponse::from).collect())
    }

    /// Number of comments on a post
    #[instrument(skip(self))]
    pub async fn count_comments(&self, post_id: PostId) -> ServiceResult<CommentCountResponse> {
        let count = self.ctx.comment_repo().count_by_post(post_id).await?;
        Ok(CommentCountResponse { count })
    }

    /// Add a comment, optionally as a reply
    #[instrument(skip(self, request), fields(user_id = %caller.user_id))]
    pub async fn add_comment(
        &self,
        caller: &Caller,
        post_id: PostId,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        caller.authorize(Action::AddComment)?;
        request.validate()?;

        let content = request.content.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyContent.into());
        }

        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        if let Some(parent_id) = request.parent_id {
            let parent = self.ctx.comment_repo().find_by_id(parent_id).await?;
            match parent {
                Some(parent) if parent.post_id == post_id => self.check_reply_depth(&parent).await?,
                _ => return Err(DomainError::ParentCommentNotFound(parent_id).into()),
            }
        }

        let comment = NewComment::new(post_id, caller.user_id, request.parent_id, content.to_string());
        let record = self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %record.id, post_id = %post_id, "Comment added");

        Ok(CommentResponse::from(blog_core::Comment::from(record)))
    }

    /// Walk up from `parent` and refuse a reply that would nest past
    /// [`MAX_THREAD_DEPTH`]
    ///
    /// A parent cut off from its root is not part of the thread.
    async fn check_reply_depth(&self, parent: &CommentRecord) -> ServiceResult<()> {
        let mut depth = 1;
        let mut ancestor = parent.parent_id;
        while let Some(ancestor_id) = ancestor {
            depth += 1;
            if depth > MAX_THREAD_DEPTH {
                return Err(DomainError::ReplyTooDeep { max: MAX_THREAD_DEPTH }.into());
            }
            ancestor = self
                .ctx
                .comment_repo()
                .find_by_id(ancestor_id)
                .await?
                .ok_or(DomainError::ParentCommentNotFound(parent.id))?
                .parent_id;
        }
        Ok(())
    }

    /// Delete a comment (its author or an admin)
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, caller: &Caller, comment_id: CommentId) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        caller.authorize(Action::DeleteComment {
            author_id: comment.user_id,
        })?;

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, post_id = %comment.post_id, "Comment deleted");

        Ok(())
    }
}
