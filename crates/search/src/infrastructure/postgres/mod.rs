// crates/search/src/infrastructure/postgres/mod.rs

pub mod repositories;
pub mod rows;
pub mod utils;

use sqlx::PgPool;
use std::sync::Arc;
use crate::domain::repositories::SearchRepositories;
use repositories::{
    PostgresBlockRepository, PostgresFollowRepository, PostgresLocationRepository,
    PostgresRelationRepository, PostgresSubscriptionRepository, PostgresUserRepository,
};

impl SearchRepositories {
    /// Tous les ports adossés à la même pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            relations: Arc::new(PostgresRelationRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            locations: Arc::new(PostgresLocationRepository::new(pool.clone())),
            follows: Arc::new(PostgresFollowRepository::new(pool.clone())),
            blocks: Arc::new(PostgresBlockRepository::new(pool.clone())),
            subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool)),
        }
    }
}
