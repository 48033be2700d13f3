// crates/search/src/infrastructure/postgres/repositories/postgres_location_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::{AccountId, GeoPoint};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;
use crate::domain::repositories::LocationRepository;
use crate::infrastructure::postgres::rows::PostgresCoordinatesRow;

pub struct PostgresLocationRepository {
    pool: PgPool,
}

impl PostgresLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PostgresLocationRepository {
    async fn fetch_coordinates(&self, id: &AccountId) -> Result<Option<GeoPoint>> {
        let row = sqlx::query_as::<_, PostgresCoordinatesRow>(
            "SELECT latitude, longitude FROM user_coordinates WHERE user_id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_domain_infra("Location.fetch_coordinates")?;

        Ok(row.map(GeoPoint::from))
    }
}
