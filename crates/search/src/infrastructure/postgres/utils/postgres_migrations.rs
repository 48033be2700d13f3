// crates/search/src/infrastructure/postgres/utils/postgres_migrations.rs

use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::{Executor, PgPool};

/// Schéma embarqué, idempotent (CREATE ... IF NOT EXISTS)
pub async fn run_search_migrations(pool: &PgPool) -> Result<()> {
    let schema = include_str!("../../../../migrations/postgres/202601010000_search_schema.sql");
    pool.execute(schema).await.map_domain_infra("SearchMigrations")?;

    tracing::info!("✅ Search migrations applied");
    Ok(())
}
