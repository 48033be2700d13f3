use shared_kernel::domain::value_objects::GeoPoint;
use sqlx::FromRow;

#[derive(FromRow, Debug)]
pub struct PostgresCoordinatesRow {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<PostgresCoordinatesRow> for GeoPoint {
    fn from(row: PostgresCoordinatesRow) -> Self {
        // Bornes garanties par les contraintes CHECK de la table
        GeoPoint::from_raw(row.latitude, row.longitude)
    }
}
