//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{CommentRecord, NewComment};
use blog_core::error::DomainError;
use blog_core::traits::{CommentRepository, RepoResult};
use blog_core::value_objects::{CommentId, PostId};

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<CommentRecord>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT c.id, c.post_id, c.user_id, c.parent_id, c.content,
                   c.created_at, c.updated_at,
                   u.name AS author_name, u.avatar_url AS author_avatar_url
            FROM comments c
            INNER JOIN users u ON u.id = c.user_id
            WHERE c.id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CommentRecord::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<CommentRecord>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT c.id, c.post_id, c.user_id, c.parent_id, c.content,
                   c.created_at, c.updated_at,
                   u.name AS author_name, u.avatar_url AS author_avatar_url
            FROM comments c
            INNER JOIN users u ON u.id = c.user_id
            WHERE c.post_id = $1
            ORDER BY c.created_at ASC, c.id ASC
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentRecord::from).collect())
    }

    #[instrument(skip(self, comment), fields(post_id = %comment.post_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<CommentRecord> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            WITH inserted AS (
                INSERT INTO comments (id, post_id, user_id, parent_id, content, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $6)
                RETURNING id, post_id, user_id, parent_id, content, created_at, updated_at
            )
            SELECT i.id, i.post_id, i.user_id, i.parent_id, i.content,
                   i.created_at, i.updated_at,
                   u.name AS author_name, u.avatar_url AS author_avatar_url
            FROM inserted i
            INNER JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(comment.post_id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(comment.parent_id.map(CommentId::into_inner))
        .bind(&comment.content)
        .bind(comment.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        // No row means the commenter has no user record
        result
            .map(CommentRecord::from)
            .ok_or(DomainError::UserNotFound(comment.user_id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_post(&self, post_id: PostId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(post_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
