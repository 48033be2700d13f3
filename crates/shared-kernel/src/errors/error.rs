// crates/shared-kernel/src/errors/error.rs

use serde_json::Value;
use thiserror::Error;
use crate::errors::AppError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String
    },

    /// Rejet d'une entrée avec un code stable et des détails structurés pour l'appelant
    #[error("Invalid {field} ({code}): {message}")]
    InvalidInput {
        field: &'static str,
        code: &'static str,
        message: String,
        details: Option<Value>
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String
    },

    /// Données incohérentes entre deux sources (ex: relation pointant vers un user inexistant)
    #[error("Data inconsistency on {entity} '{id}': {reason}")]
    DataConsistency {
        entity: &'static str,
        id: String,
        reason: String
    },

    /// Une opération n'a pas répondu dans le délai imparti
    #[error("Operation '{operation}' timed out after {after_ms}ms")]
    Timeout {
        operation: &'static str,
        after_ms: u64
    },

    /// Opération interrompue par un signal d'annulation (ex: deadline dépassée en amont)
    #[error("Operation '{operation}' was cancelled")]
    Cancelled {
        operation: &'static str
    },

    /// Erreur liée à l'infrastructure (DB, réseau)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidInput { .. })
    }

    /// Une erreur de ce type signale une corruption en amont : elle doit remonter telle quelle
    pub fn is_data_consistency(&self) -> bool {
        matches!(self, Self::DataConsistency { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Cancelled { .. })
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err.code {
            crate::errors::ErrorCode::NotFound => DomainError::NotFound {
                entity: "Resource",
                id: "unknown".into()
            },
            _ => DomainError::Internal(err.message),
        }
    }
}
