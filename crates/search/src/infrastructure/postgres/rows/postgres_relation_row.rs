use shared_kernel::domain::value_objects::AccountId;
use sqlx::FromRow;
use uuid::Uuid;
use crate::domain::entities::RelationEdge;

#[derive(FromRow, Debug)]
pub struct PostgresRelationRow {
    pub user_id: Uuid,
    pub related_user_id: Uuid,
    pub weight: f64,
}

impl From<PostgresRelationRow> for RelationEdge {
    fn from(row: PostgresRelationRow) -> Self {
        Self {
            source: AccountId::new_unchecked(row.user_id),
            target: AccountId::new_unchecked(row.related_user_id),
            weight: row.weight,
        }
    }
}
