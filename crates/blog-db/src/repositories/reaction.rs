//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use blog_core::aggregates::ReactionTransition;
use blog_core::entities::{Reaction, ReactionKind};
use blog_core::traits::{ReactionRepository, RepoResult};
use blog_core::value_objects::{PostId, ReactionId, UserId};

use crate::mappers::reactions_from_models;
use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, post_id, user_id, kind, created_at
            FROM reactions
            WHERE post_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        reactions_from_models(results)
    }

    #[instrument(skip(self, post_ids), fields(posts = post_ids.len()))]
    async fn find_by_posts(&self, post_ids: &[PostId]) -> RepoResult<Vec<Reaction>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = post_ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, post_id, user_id, kind, created_at
            FROM reactions
            WHERE post_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        reactions_from_models(results)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, post_id: PostId, user_id: UserId) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, post_id, user_id, kind, created_at
            FROM reactions
            WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        post_id: PostId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> RepoResult<ReactionTransition> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Row lock serializes concurrent toggles by the same user on the same post
        let current = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, post_id, user_id, kind, created_at
            FROM reactions
            WHERE post_id = $1 AND user_id = $2
            FOR UPDATE
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(Reaction::try_from)
        .transpose()?;

        let transition = ReactionTransition::plan(current.as_ref().map(|r| r.kind), kind);
        debug!(?transition, "Planned reaction toggle");

        match transition {
            ReactionTransition::Remove(_) => {
                sqlx::query("DELETE FROM reactions WHERE post_id = $1 AND user_id = $2")
                    .bind(post_id.into_inner())
                    .bind(user_id.into_inner())
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
            }
            ReactionTransition::Switch { to, .. } => {
                sqlx::query("UPDATE reactions SET kind = $3 WHERE post_id = $1 AND user_id = $2")
                    .bind(post_id.into_inner())
                    .bind(user_id.into_inner())
                    .bind(to.as_str())
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
            }
            ReactionTransition::Insert(kind) => {
                // A concurrent first insert has no row to lock; the unique
                // constraint turns the loser into an in-place update.
                sqlx::query(
                    r#"
                    INSERT INTO reactions (id, post_id, user_id, kind, created_at)
                    VALUES ($1, $2, $3, $4, now())
                    ON CONFLICT (post_id, user_id) DO UPDATE SET kind = EXCLUDED.kind
                    "#,
                )
                .bind(ReactionId::new().into_inner())
                .bind(post_id.into_inner())
                .bind(user_id.into_inner())
                .bind(kind.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(transition)
    }
}
