//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Category;
use blog_core::error::DomainError;
use blog_core::traits::{CategoryRepository, RepoResult};
use blog_core::value_objects::{CategoryId, PostId};

use crate::models::CategoryModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT id, name, slug, description, created_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT id, name, slug, description, created_at
            FROM categories
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT id, name, slug, description, created_at
            FROM categories
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT c.id, c.name, c.slug, c.description, c.created_at
            FROM categories c
            INNER JOIN post_categories pc ON pc.category_id = c.id
            WHERE pc.post_id = $1
            ORDER BY c.name
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self, category), fields(category_id = %category.id))]
    async fn create(&self, category: &Category) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, slug, description, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(category.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::CategoryAlreadyExists(category.name.clone()))
        })?;

        Ok(())
    }

    #[instrument(skip(self, category), fields(category_id = %category.id))]
    async fn update(&self, category: &Category) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = $2, slug = $3, description = $4
            WHERE id = $1
            "#,
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::CategoryAlreadyExists(category.name.clone()))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CategoryNotFound(category.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CategoryId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CategoryNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn link_post(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO post_categories (post_id, category_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, category_id) DO NOTHING
            "#,
        )
        .bind(post_id.into_inner())
        .bind(category_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn unlink_post(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<()> {
        sqlx::query("DELETE FROM post_categories WHERE post_id = $1 AND category_id = $2")
            .bind(post_id.into_inner())
            .bind(category_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
