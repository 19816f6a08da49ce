//! Public read service
//!
//! Published posts as readers see them. Drafts never leave this service.

use blog_core::{DomainError, PageRequest, PostPage, UserId};
use tracing::{debug, instrument};

use crate::dto::{AuthorPostsResponse, PostListResponse, PublicPostResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of posts on the landing page
pub const RECENT_POSTS_LIMIT: u32 = 6;

/// Public read service
pub struct PublicService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PublicService<'a> {
    /// Create a new PublicService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Latest published posts
    #[instrument(skip(self))]
    pub async fn get_recent_posts(&self, limit: u32) -> ServiceResult<Vec<PublicPostResponse>> {
        let limit = limit.clamp(1, PageRequest::MAX_LIMIT);
        let posts = self.ctx.post_repo().find_recent_published(limit).await?;
        Ok(posts.into_iter().map(PublicPostResponse::from).collect())
    }

    /// A published post by slug
    #[instrument(skip(self))]
    pub async fn get_post_by_slug(&self, slug: &str) -> ServiceResult<PublicPostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::PostSlugNotFound(slug.to_string()))?;
        Ok(post.into())
    }

    /// All published posts, newest first
    #[instrument(skip(self))]
    pub async fn get_all_posts(&self, page: PageRequest) -> ServiceResult<PostListResponse> {
        let result = self.ctx.post_repo().list_published(page).await?;
        Ok(list_response(result, page))
    }

    /// Published posts in a category; an unknown category yields an empty page
    #[instrument(skip(self))]
    pub async fn get_posts_by_category(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> ServiceResult<PostListResponse> {
        let Some(category) = self.ctx.category_repo().find_by_slug(slug).await? else {
            debug!(slug, "Unknown category");
            return Ok(list_response(PostPage::default(), page));
        };

        let result = self
            .ctx
            .post_repo()
            .list_published_by_category(category.id, page)
            .await?;
        Ok(list_response(result, page))
    }

    /// Published posts by an author; an unknown author yields an empty page
    /// and no author
    #[instrument(skip(self))]
    pub async fn get_posts_by_author(
        &self,
        author_id: UserId,
        page: PageRequest,
    ) -> ServiceResult<AuthorPostsResponse> {
        let Some(author) = self.ctx.user_repo().find_by_id(author_id).await? else {
            debug!(author_id = %author_id, "Unknown author");
            return Ok(AuthorPostsResponse {
                posts: Vec::new(),
                total: 0,
                page: page.page,
                limit: page.limit,
                author: None,
            });
        };

        let result = self
            .ctx
            .post_repo()
            .list_published_by_author(author_id, page)
            .await?;

        Ok(AuthorPostsResponse {
            posts: result.posts.into_iter().map(PublicPostResponse::from).collect(),
            total: result.total,
            page: page.page,
            limit: page.limit,
            author: Some(author.summary().into()),
        })
    }
}

fn list_response(result: PostPage, page: PageRequest) -> PostListResponse {
    PostListResponse {
        posts: result.posts.into_iter().map(PublicPostResponse::from).collect(),
        total: result.total,
        page: page.page,
        limit: page.limit,
    }
}
