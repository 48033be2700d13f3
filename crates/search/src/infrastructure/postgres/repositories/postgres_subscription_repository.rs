// crates/search/src/infrastructure/postgres/repositories/postgres_subscription_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;
use crate::domain::repositories::SubscriptionRepository;
use crate::domain::value_objects::SubscriptionStatus;

pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn fetch_status(&self, user_id: &AccountId) -> Result<Option<SubscriptionStatus>> {
        let raw = sqlx::query_scalar::<_, String>(
            "SELECT status FROM user_subscriptions WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_domain_infra("Subscription.fetch_status")?;

        raw.map(|status| {
            status.parse::<SubscriptionStatus>().map_err(|e| DomainError::DataConsistency {
                entity: "UserSubscription",
                id: user_id.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
    }
}
