use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

// Regex compilée une seule fois
static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9._]*[a-z0-9]$").expect("username regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 30;

    /// Constructeur sécurisé (API / Domaine)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // Normalisation NFC + Lowercase + Trim
        let normalized: String = raw.trim()
            .nfc()
            .collect::<String>()
            .to_lowercase();

        let username = Self(normalized);
        username.validate()?;

        Ok(username)
    }

    /// Reconstruction depuis la DB, sans re-valider
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Correspondance textuelle stricte (sous-chaîne, sensible à la casse).
    /// Un fragment vide correspond à tout.
    pub fn contains_fragment(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }
}

impl ValueObject for Username {
    fn validate(&self) -> Result<()> {
        let len = self.0.chars().count();

        if len < Self::MIN_LEN || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "username",
                reason: format!("Username must be between {} and {} characters", Self::MIN_LEN, Self::MAX_LEN),
            });
        }

        if !USERNAME_REGEX.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "username",
                reason: "Invalid format: only lowercase, numbers, dots or underscores allowed. Cannot start/end with special chars.".into(),
            });
        }

        if self.0.contains("..") || self.0.contains("__") || self.0.contains("._") || self.0.contains("_.") {
            return Err(DomainError::Validation {
                field: "username",
                reason: "Username cannot contain consecutive special characters".into(),
            });
        }

        Ok(())
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_normalizes_case_and_spaces() {
        let username = Username::try_new("  Ann.Smith ").unwrap();
        assert_eq!(username.as_str(), "ann.smith");
    }

    #[test]
    fn test_try_new_rejects_consecutive_specials() {
        assert!(Username::try_new("ann__smith").is_err());
        assert!(Username::try_new("_ann").is_err());
    }

    #[test]
    fn test_contains_fragment() {
        let username = Username::from_raw("joanna");
        assert!(username.contains_fragment("ann"));
        assert!(username.contains_fragment(""));
        assert!(!username.contains_fragment("ANN"));
    }
}
