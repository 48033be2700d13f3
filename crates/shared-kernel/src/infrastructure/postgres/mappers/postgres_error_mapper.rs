// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::errors::DomainError;

pub trait SqlxErrorExt<T> {
    /// Traduit une erreur sqlx en erreur d'infrastructure, préfixée par l'opération
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| {
            tracing::error!(context, "Database error: {:?}", e);
            match e {
                sqlx::Error::PoolTimedOut => DomainError::Timeout {
                    operation: context,
                    after_ms: 0,
                },
                sqlx::Error::Database(db_err) => {
                    DomainError::Infrastructure(format!("{}: {}", context, db_err.message()))
                }
                other => DomainError::Infrastructure(format!("{}: {}", context, other)),
            }
        })
    }
}
