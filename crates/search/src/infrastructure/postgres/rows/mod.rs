mod postgres_coordinates_row;
mod postgres_relation_row;
mod postgres_user_row;

pub use postgres_coordinates_row::PostgresCoordinatesRow;
pub use postgres_relation_row::PostgresRelationRow;
pub use postgres_user_row::{PostgresUserIdentityRow, PostgresUserProfileRow};
