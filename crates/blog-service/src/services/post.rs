//! Post service
//!
//! Handles post authoring: create, update, publish, unpublish, delete and
//! the author's own listings.

use blog_core::text::{generate_excerpt, generate_slug, DEFAULT_EXCERPT_LENGTH};
use blog_core::{Action, Caller, DomainError, Post, PostId, PostStatus};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post owned by the caller
    #[instrument(skip(self, request), fields(user_id = %caller.user_id))]
    pub async fn create_post(
        &self,
        caller: &Caller,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        caller.authorize(Action::CreatePost)?;
        request.validate()?;

        let slug = slug_for(&request.title)?;
        let mut post = Post::new(
            PostId::new(),
            caller.user_id,
            request.title,
            slug,
            request.content,
        );
        post.excerpt = Some(excerpt_for(request.excerpt, &post.content));
        post.featured_image = request.featured_image.filter(|url| !url.is_empty());
        if request.status.unwrap_or_default() == PostStatus::Published {
            post.publish();
        }

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, slug = %post.slug, status = %post.status.as_str(), "Post created");

        Ok(post.into())
    }

    /// Get a post for editing, drafts included
    #[instrument(skip(self))]
    pub async fn get_post(&self, caller: &Caller, post_id: PostId) -> ServiceResult<PostResponse> {
        let post = self.load_for_change(caller, post_id).await?;
        Ok(post.into())
    }

    /// The caller's posts, newest first
    #[instrument(skip(self))]
    pub async fn get_my_posts(&self, caller: &Caller) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().find_by_author(caller.user_id).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Update a post
    ///
    /// A new title re-derives the slug. New content regenerates the excerpt
    /// unless one is supplied alongside it.
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        caller: &Caller,
        post_id: PostId,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut post = self.load_for_change(caller, post_id).await?;
        request.validate()?;

        if let Some(title) = request.title {
            post.slug = slug_for(&title)?;
            post.title = title;
        }

        match (request.content, request.excerpt) {
            (Some(content), excerpt) => {
                post.excerpt = Some(excerpt_for(excerpt, &content));
                post.content = content;
            }
            (None, Some(excerpt)) => post.excerpt = Some(excerpt),
            (None, None) => {}
        }

        if let Some(image) = request.featured_image {
            post.featured_image = Some(image).filter(|url| !url.is_empty());
        }

        match request.status {
            Some(PostStatus::Published) => post.publish(),
            Some(PostStatus::Draft) => post.unpublish(),
            None => post.touch(),
        }

        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post.id, "Post updated");

        Ok(post.into())
    }

    /// Make a post publicly visible
    #[instrument(skip(self))]
    pub async fn publish_post(&self, caller: &Caller, post_id: PostId) -> ServiceResult<PostResponse> {
        let mut post = self.load_for_change(caller, post_id).await?;
        post.publish();
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post.id, "Post published");

        Ok(post.into())
    }

    /// Move a post back to draft
    #[instrument(skip(self))]
    pub async fn unpublish_post(
        &self,
        caller: &Caller,
        post_id: PostId,
    ) -> ServiceResult<PostResponse> {
        let mut post = self.load_for_change(caller, post_id).await?;
        post.unpublish();
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post.id, "Post unpublished");

        Ok(post.into())
    }

    /// Delete a post with its comments, reactions and category links
    #[instrument(skip(self))]
    pub async fn delete_post(&self, caller: &Caller, post_id: PostId) -> ServiceResult<()> {
        let post = self.load_for_change(caller, post_id).await?;
        self.ctx.post_repo().delete(post.id).await?;

        info!(post_id = %post_id, "Post deleted");

        Ok(())
    }

    /// Load a post and check the caller may change it
    async fn load_for_change(&self, caller: &Caller, post_id: PostId) -> ServiceResult<Post> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        caller.authorize(Action::ModifyPost {
            author_id: post.author_id,
        })?;

        Ok(post)
    }
}

fn slug_for(title: &str) -> Result<String, DomainError> {
    let slug = generate_slug(title);
    if slug.is_empty() {
        return Err(DomainError::InvalidSlug(title.to_string()));
    }
    Ok(slug)
}

fn excerpt_for(excerpt: Option<String>, content: &str) -> String {
    excerpt
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| generate_excerpt(content, DEFAULT_EXCERPT_LENGTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_for_rejects_symbol_titles() {
        assert!(slug_for("!!!").is_err());
        assert_eq!(slug_for("Hello, World").unwrap(), "hello-world");
    }

    #[test]
    fn test_excerpt_for_prefers_given_text() {
        assert_eq!(excerpt_for(Some("Mine".into()), "<p>Body</p>"), "Mine");
        assert_eq!(excerpt_for(Some("  ".into()), "<p>Body</p>"), "Body");
        assert_eq!(excerpt_for(None, "<p>Body</p>"), "Body");
    }
}
