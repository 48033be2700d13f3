use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Entité introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 2. Validation (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            DomainError::InvalidInput { field, code, message, details } => {
                let mut payload = serde_json::json!({ "field": field, "code": code });
                if let (Some(Value::Object(extra)), Some(map)) = (details, payload.as_object_mut()) {
                    map.extend(extra);
                }
                Self {
                    code: ErrorCode::ValidationFailed,
                    message,
                    details: Some(payload),
                }
            }

            // 3. Délai dépassé (503) : le client peut réessayer
            DomainError::Timeout { operation, after_ms } => Self::new(
                ErrorCode::ServiceUnavailable,
                format!("{operation} did not complete within {after_ms}ms"),
            ),

            DomainError::Cancelled { operation } => Self::new(
                ErrorCode::ServiceUnavailable,
                format!("{operation} was cancelled"),
            ),

            // 4. Erreurs techniques (500)
            // On masque le détail au client, il est loggé au point d'origine
            DomainError::DataConsistency { .. }
            | DomainError::Infrastructure(_)
            | DomainError::Internal(_) => Self::new(
                ErrorCode::InternalError,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // En interne, on log l'erreur réelle pour le debugging
        tracing::error!("Database infrastructure error: {:?}", err);

        Self::new(ErrorCode::InfrastructureFailure, "A database error occurred")
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
