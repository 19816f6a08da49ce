//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::{Post, PostPage, PublicPost};
use blog_core::error::DomainError;
use blog_core::traits::{PageRequest, PostRepository, RepoResult};
use blog_core::value_objects::{CategoryId, PostId, UserId};

use crate::mappers::{assemble_public_posts, PostWrite};
use crate::models::{PostCategoryModel, PostModel, PublicPostModel};

use super::error::{map_db_error, map_unique_violation};

/// Columns of a published post joined with its author
const PUBLIC_POST_COLUMNS: &str = r#"
    p.id, p.title, p.slug, p.content, p.excerpt, p.featured_image,
    p.published_at, p.created_at,
    u.id AS author_id, u.name AS author_name, u.bio AS author_bio,
    u.avatar_url AS author_avatar_url
"#;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load categories for a batch of posts in one query and assemble the views
    async fn with_categories(&self, rows: Vec<PublicPostModel>) -> RepoResult<Vec<PublicPost>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let categories = sqlx::query_as::<_, PostCategoryModel>(
            r#"
            SELECT pc.post_id, c.id, c.name, c.slug
            FROM post_categories pc
            INNER JOIN categories c ON c.id = pc.category_id
            WHERE pc.post_id = ANY($1)
            ORDER BY c.name
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(assemble_public_posts(rows, categories))
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, title, slug, content, excerpt, featured_image,
                   status, published_at, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: UserId) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, title, slug, content, excerpt, featured_image,
                   status, published_at, created_at, updated_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        let write = PostWrite::new(post);

        sqlx::query(
            r#"
            INSERT INTO posts (id, author_id, title, slug, content, excerpt, featured_image,
                               status, published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(write.id)
        .bind(write.author_id)
        .bind(write.title)
        .bind(write.slug)
        .bind(write.content)
        .bind(write.excerpt)
        .bind(write.featured_image)
        .bind(write.status)
        .bind(post.published_at)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(post.slug.clone())))?;

        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let write = PostWrite::new(post);

        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, slug = $3, content = $4, excerpt = $5, featured_image = $6,
                status = $7, published_at = $8, updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(write.id)
        .bind(write.title)
        .bind(write.slug)
        .bind(write.content)
        .bind(write.excerpt)
        .bind(write.featured_image)
        .bind(write.status)
        .bind(post.published_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(post.slug.clone())))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<()> {
        // Comments, reactions and category links cascade
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_published_by_slug(&self, slug: &str) -> RepoResult<Option<PublicPost>> {
        let query = format!(
            r#"
            SELECT {PUBLIC_POST_COLUMNS}
            FROM posts p
            INNER JOIN users u ON u.id = p.author_id
            WHERE p.slug = $1 AND p.status = 'published'
            "#
        );

        let row = sqlx::query_as::<_, PublicPostModel>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match row {
            Some(row) => Ok(self.with_categories(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_recent_published(&self, limit: u32) -> RepoResult<Vec<PublicPost>> {
        let query = format!(
            r#"
            SELECT {PUBLIC_POST_COLUMNS}
            FROM posts p
            INNER JOIN users u ON u.id = p.author_id
            WHERE p.status = 'published'
            ORDER BY p.published_at DESC NULLS LAST, p.created_at DESC
            LIMIT $1
            "#
        );

        let rows = sqlx::query_as::<_, PublicPostModel>(&query)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        self.with_categories(rows).await
    }

    #[instrument(skip(self))]
    async fn list_published(&self, page: PageRequest) -> RepoResult<PostPage> {
        let query = format!(
            r#"
            SELECT {PUBLIC_POST_COLUMNS}
            FROM posts p
            INNER JOIN users u ON u.id = p.author_id
            WHERE p.status = 'published'
            ORDER BY p.published_at DESC NULLS LAST, p.created_at DESC
            LIMIT $1 OFFSET $2
            "#
        );

        let rows = sqlx::query_as::<_, PublicPostModel>(&query)
            .bind(i64::from(page.limit))
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts WHERE status = 'published'",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(PostPage {
            posts: self.with_categories(rows).await?,
            total,
        })
    }

    #[instrument(skip(self))]
    async fn list_published_by_category(
        &self,
        category_id: CategoryId,
        page: PageRequest,
    ) -> RepoResult<PostPage> {
        let query = format!(
            r#"
            SELECT {PUBLIC_POST_COLUMNS}
            FROM posts p
            INNER JOIN users u ON u.id = p.author_id
            INNER JOIN post_categories pc ON pc.post_id = p.id
            WHERE pc.category_id = $1 AND p.status = 'published'
            ORDER BY p.published_at DESC NULLS LAST, p.created_at DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, PublicPostModel>(&query)
            .bind(category_id.into_inner())
            .bind(i64::from(page.limit))
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM posts p
            INNER JOIN post_categories pc ON pc.post_id = p.id
            WHERE pc.category_id = $1 AND p.status = 'published'
            "#,
        )
        .bind(category_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(PostPage {
            posts: self.with_categories(rows).await?,
            total,
        })
    }

    #[instrument(skip(self))]
    async fn list_published_by_author(
        &self,
        author_id: UserId,
        page: PageRequest,
    ) -> RepoResult<PostPage> {
        let query = format!(
            r#"
            SELECT {PUBLIC_POST_COLUMNS}
            FROM posts p
            INNER JOIN users u ON u.id = p.author_id
            WHERE p.author_id = $1 AND p.status = 'published'
            ORDER BY p.published_at DESC NULLS LAST, p.created_at DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, PublicPostModel>(&query)
            .bind(author_id.into_inner())
            .bind(i64::from(page.limit))
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts WHERE author_id = $1 AND status = 'published'",
        )
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(PostPage {
            posts: self.with_categories(rows).await?,
            total,
        })
    }
}
