// crates/search/src/infrastructure/postgres/repositories/postgres_relation_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;
use crate::domain::entities::RelationEdge;
use crate::domain::repositories::RelationRepository;
use crate::infrastructure::postgres::rows::PostgresRelationRow;

pub struct PostgresRelationRepository {
    pool: PgPool,
}

impl PostgresRelationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RelationRepository for PostgresRelationRepository {
    async fn fetch_strongest(
        &self,
        source: &AccountId,
        min_weight: f64,
        limit: usize,
    ) -> Result<Vec<RelationEdge>> {
        let rows = sqlx::query_as::<_, PostgresRelationRow>(
            r#"
            SELECT user_id, related_user_id, weight
            FROM relations
            WHERE user_id = $1
              AND related_user_id <> user_id
              AND weight >= $2
            ORDER BY weight DESC
            LIMIT $3
            "#,
        )
        .bind(source.as_uuid())
        .bind(min_weight)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_domain_infra("Relation.fetch_strongest")?;

        Ok(rows.into_iter().map(RelationEdge::from).collect())
    }
}
