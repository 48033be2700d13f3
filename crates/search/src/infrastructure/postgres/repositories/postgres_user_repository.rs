// crates/search/src/infrastructure/postgres/repositories/postgres_user_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;
use crate::domain::entities::{UserIdentity, UserProfile};
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::SearchTerm;
use crate::infrastructure::postgres::rows::{PostgresUserIdentityRow, PostgresUserProfileRow};

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Motif LIKE préfixe, insensible à la casse. Les jokers du terme sont échappés.
/// La requête l'applique au début du username et après chaque séparateur `.` ou `_`.
pub(crate) fn prefix_pattern(term: &SearchTerm) -> String {
    let mut pattern = String::with_capacity(term.as_str().len() + 1);
    for c in term.as_str().to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn fetch_identity(&self, id: &AccountId) -> Result<Option<UserIdentity>> {
        let row = sqlx::query_as::<_, PostgresUserIdentityRow>(
            "SELECT id, username FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_domain_infra("User.fetch_identity")?;

        Ok(row.map(UserIdentity::from))
    }

    async fn fetch_profile(&self, id: &AccountId) -> Result<Option<UserProfile>> {
        let row = sqlx::query_as::<_, PostgresUserProfileRow>(
            r#"
            SELECT u.id, u.username, u.display_name, u.verified, u.muted, u.blocked, u.deleted,
                   s.total_followers_num, p.tiny_resolution
            FROM users u
            LEFT JOIN user_statistics s ON s.user_id = u.id
            LEFT JOIN profile_pictures p ON p.user_id = u.id
            WHERE u.id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_domain_infra("User.fetch_profile")?;

        Ok(row.map(UserProfile::from))
    }

    async fn search_by_username(
        &self,
        term: &SearchTerm,
        excluded: &AccountId,
        limit: usize,
    ) -> Result<Vec<UserIdentity>> {
        let rows = sqlx::query_as::<_, PostgresUserIdentityRow>(
            r#"
            SELECT id, username
            FROM users
            WHERE (lower(username) LIKE $1 ESCAPE '\'
                   OR lower(username) LIKE ('%.' || $1) ESCAPE '\'
                   OR lower(username) LIKE ('%\_' || $1) ESCAPE '\')
              AND id <> $2
              AND blocked = FALSE
              AND deleted = FALSE
            ORDER BY username
            LIMIT $3
            "#,
        )
        .bind(prefix_pattern(term))
        .bind(excluded.as_uuid())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_domain_infra("User.search_by_username")?;

        Ok(rows.into_iter().map(UserIdentity::from).collect())
    }
}
