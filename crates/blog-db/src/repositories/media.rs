//! PostgreSQL implementation of MediaRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Media;
use blog_core::error::DomainError;
use blog_core::traits::{MediaRepository, RepoResult};
use blog_core::value_objects::{MediaId, UserId};

use crate::models::MediaModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MediaRepository
#[derive(Clone)]
pub struct PgMediaRepository {
    pool: PgPool,
}

impl PgMediaRepository {
    /// Create a new PgMediaRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaRepository for PgMediaRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MediaId) -> RepoResult<Option<Media>> {
        let result = sqlx::query_as::<_, MediaModel>(
            r#"
            SELECT id, user_id, filename, original_filename, url, size, mime_type, created_at
            FROM media
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Media::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Media>> {
        let results = sqlx::query_as::<_, MediaModel>(
            r#"
            SELECT id, user_id, filename, original_filename, url, size, mime_type, created_at
            FROM media
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Media::from).collect())
    }

    #[instrument(skip(self, media), fields(media_id = %media.id))]
    async fn create(&self, media: &Media) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO media (id, user_id, filename, original_filename, url, size, mime_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(media.id.into_inner())
        .bind(media.user_id.into_inner())
        .bind(&media.filename)
        .bind(&media.original_filename)
        .bind(&media.url)
        .bind(media.size)
        .bind(&media.mime_type)
        .bind(media.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MediaId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MediaNotFound(id));
        }

        Ok(())
    }
}
