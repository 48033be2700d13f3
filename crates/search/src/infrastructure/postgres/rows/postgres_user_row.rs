// crates/search/src/infrastructure/postgres/rows/postgres_user_row.rs

use shared_kernel::domain::value_objects::{AccountId, Username};
use sqlx::FromRow;
use uuid::Uuid;
use crate::domain::entities::{UserIdentity, UserProfile};

#[derive(FromRow, Debug)]
pub struct PostgresUserIdentityRow {
    pub id: Uuid,
    pub username: String,
}

impl From<PostgresUserIdentityRow> for UserIdentity {
    fn from(row: PostgresUserIdentityRow) -> Self {
        Self {
            id: AccountId::new_unchecked(row.id),
            username: Username::from_raw(row.username),
        }
    }
}

/// users + user_statistics + profile_pictures (jointures externes)
#[derive(FromRow, Debug)]
pub struct PostgresUserProfileRow {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub verified: bool,
    pub muted: bool,
    pub blocked: bool,
    pub deleted: bool,
    pub total_followers_num: Option<i64>,
    pub tiny_resolution: Option<String>,
}

impl From<PostgresUserProfileRow> for UserProfile {
    fn from(row: PostgresUserProfileRow) -> Self {
        Self {
            id: AccountId::new_unchecked(row.id),
            username: Username::from_raw(row.username),
            display_name: row.display_name,
            verified: row.verified,
            muted: row.muted,
            blocked: row.blocked,
            deleted: row.deleted,
            // Pas de ligne de statistiques : 0 abonné
            follower_count: row.total_followers_num.unwrap_or(0).max(0) as u64,
            profile_picture: row.tiny_resolution.filter(|url| !url.is_empty()),
        }
    }
}
