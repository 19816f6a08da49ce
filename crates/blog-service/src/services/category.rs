//! Category service
//!
//! Admin-managed categories and the post-category links authors maintain.

use blog_core::text::generate_slug;
use blog_core::{Action, Caller, Category, CategoryId, DomainError, PostId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All categories, newest first
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().list_all().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// Create a category (admin only)
    #[instrument(skip(self, request))]
    pub async fn create_category(
        &self,
        caller: &Caller,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        caller.authorize(Action::CreateCategory)?;
        request.validate()?;

        let slug = category_slug(&request.name)?;
        let category = Category::new(
            CategoryId::new(),
            request.name,
            slug,
            request.description.filter(|d| !d.is_empty()),
        );

        self.ctx.category_repo().create(&category).await?;

        info!(category_id = %category.id, slug = %category.slug, "Category created");

        Ok(category.into())
    }

    /// Rename or describe a category (admin only)
    #[instrument(skip(self, request))]
    pub async fn update_category(
        &self,
        caller: &Caller,
        category_id: CategoryId,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        caller.authorize(Action::UpdateCategory)?;
        request.validate()?;

        let mut category = self
            .ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(category_id))?;

        if let Some(name) = request.name {
            category.slug = category_slug(&name)?;
            category.name = name;
        }
        if let Some(description) = request.description {
            category.description = Some(description).filter(|d| !d.is_empty());
        }

        self.ctx.category_repo().update(&category).await?;

        info!(category_id = %category.id, "Category updated");

        Ok(category.into())
    }

    /// Delete a category and its post links (admin only)
    #[instrument(skip(self))]
    pub async fn delete_category(&self, caller: &Caller, category_id: CategoryId) -> ServiceResult<()> {
        caller.authorize(Action::DeleteCategory)?;

        self.ctx.category_repo().delete(category_id).await?;

        info!(category_id = %category_id, "Category deleted");

        Ok(())
    }

    /// Attach a category to a post
    #[instrument(skip(self))]
    pub async fn add_post_category(
        &self,
        caller: &Caller,
        post_id: PostId,
        category_id: CategoryId,
    ) -> ServiceResult<()> {
        caller.authorize(Action::LinkPostCategory)?;
        self.ensure_link_targets(post_id, category_id).await?;

        self.ctx.category_repo().link_post(post_id, category_id).await?;

        info!(post_id = %post_id, category_id = %category_id, "Category linked to post");

        Ok(())
    }

    /// Detach a category from a post
    #[instrument(skip(self))]
    pub async fn remove_post_category(
        &self,
        caller: &Caller,
        post_id: PostId,
        category_id: CategoryId,
    ) -> ServiceResult<()> {
        caller.authorize(Action::LinkPostCategory)?;

        self.ctx.category_repo().unlink_post(post_id, category_id).await?;

        info!(post_id = %post_id, category_id = %category_id, "Category unlinked from post");

        Ok(())
    }

    async fn ensure_link_targets(&self, post_id: PostId, category_id: CategoryId) -> ServiceResult<()> {
        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }
        if self.ctx.category_repo().find_by_id(category_id).await?.is_none() {
            return Err(DomainError::CategoryNotFound(category_id).into());
        }
        Ok(())
    }
}

fn category_slug(name: &str) -> Result<String, DomainError> {
    let slug = generate_slug(name);
    if slug.is_empty() {
        return Err(DomainError::InvalidSlug(name.to_string()));
    }
    Ok(slug)
}
