// crates/search/src/application/validate_search_term/search_term_error.rs

use serde::Serialize;
use serde_json::{json, Value};
use shared_kernel::errors::{AppError, DomainError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchTermErrorKind {
    InvalidType,
    EmptyTerm,
    TooShort,
    TooLong,
    SecurityThreat,
    InvalidCharacters,
}

/// Échec de validation d'un terme de recherche : retourné, jamais paniqué
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchTermError {
    #[error("Search term must be a string")]
    InvalidType,

    #[error("Search term cannot be empty or contain only whitespace")]
    EmptyTerm,

    #[error("Search term must be at least {min} character(s)")]
    TooShort { current: usize, min: usize },

    #[error("Search term cannot exceed {max} characters")]
    TooLong { current: usize, max: usize },

    #[error("Search term contains potentially malicious characters")]
    SecurityThreat { patterns: Vec<&'static str> },

    #[error("Search term contains invalid characters")]
    InvalidCharacters,
}

impl SearchTermError {
    pub fn kind(&self) -> SearchTermErrorKind {
        match self {
            Self::InvalidType => SearchTermErrorKind::InvalidType,
            Self::EmptyTerm => SearchTermErrorKind::EmptyTerm,
            Self::TooShort { .. } => SearchTermErrorKind::TooShort,
            Self::TooLong { .. } => SearchTermErrorKind::TooLong,
            Self::SecurityThreat { .. } => SearchTermErrorKind::SecurityThreat,
            Self::InvalidCharacters => SearchTermErrorKind::InvalidCharacters,
        }
    }

    /// Code stable exposé aux appelants
    pub fn code(&self) -> &'static str {
        match self.kind() {
            SearchTermErrorKind::InvalidType => "SEARCH_INVALID_TYPE",
            SearchTermErrorKind::EmptyTerm => "SEARCH_EMPTY_TERM",
            SearchTermErrorKind::TooShort => "SEARCH_TOO_SHORT",
            SearchTermErrorKind::TooLong => "SEARCH_TOO_LONG",
            SearchTermErrorKind::SecurityThreat => "SEARCH_SECURITY_THREAT",
            SearchTermErrorKind::InvalidCharacters => "SEARCH_INVALID_CHARACTERS",
        }
    }

    pub fn details(&self) -> Option<Value> {
        match self {
            Self::TooShort { current, min } => Some(json!({
                "current_length": current,
                "minimum_length": min,
            })),
            Self::TooLong { current, max } => Some(json!({
                "current_length": current,
                "maximum_length": max,
            })),
            Self::SecurityThreat { patterns } => Some(json!({ "detected_patterns": patterns })),
            _ => None,
        }
    }
}

impl From<SearchTermError> for DomainError {
    fn from(error: SearchTermError) -> Self {
        DomainError::InvalidInput {
            field: "search_term",
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

impl From<SearchTermError> for AppError {
    fn from(error: SearchTermError) -> Self {
        let mut details = json!({
            "field": "search_term",
            "code": error.code(),
            "kind": error.kind(),
        });
        if let (Some(Value::Object(extra)), Some(map)) = (error.details(), details.as_object_mut()) {
            map.extend(extra);
        }

        AppError::new(ErrorCode::ValidationFailed, error.to_string()).with_details(details)
    }
}
