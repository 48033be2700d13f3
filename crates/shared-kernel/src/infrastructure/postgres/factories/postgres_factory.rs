// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_factory.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DbConfig {
    /// Charge la config depuis les variables d'environnement
    pub fn from_env() -> AppResult<Self> {
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(20);

        Ok(Self {
            url: std::env::var("DATABASE_URL")
                .map_err(|_| AppError::new(ErrorCode::InternalError, "DATABASE_URL must be set"))?,
            max_connections,
            min_connections: 1,
            connect_timeout: Duration::from_secs(3),
        })
    }
}

pub async fn create_postgres_pool(config: &DbConfig) -> AppResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::new(
                ErrorCode::InfrastructureFailure,
                format!("Failed to connect to Postgres: {}", e),
            )
        })
}
