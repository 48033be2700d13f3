// crates/search/src/infrastructure/postgres/repositories/postgres_edge_repositories.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;
use crate::domain::repositories::{BlockRepository, FollowRepository};

pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn exists(&self, follower: &AccountId, followee: &AccountId) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE user_id = $1 AND followed_user_id = $2)",
        )
        .bind(follower.as_uuid())
        .bind(followee.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_domain_infra("Follow.exists")
    }
}

pub struct PostgresBlockRepository {
    pool: PgPool,
}

impl PostgresBlockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlockRepository for PostgresBlockRepository {
    async fn exists(&self, blocker: &AccountId, blockee: &AccountId) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM blocks WHERE user_id = $1 AND blocked_user_id = $2)",
        )
        .bind(blocker.as_uuid())
        .bind(blockee.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_domain_infra("Block.exists")
    }
}
