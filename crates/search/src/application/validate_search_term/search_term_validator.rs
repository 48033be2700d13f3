// crates/search/src/application/validate_search_term/search_term_validator.rs

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use crate::application::validate_search_term::SearchTermError;
use crate::config::SearchRules;
use crate::domain::value_objects::SearchTerm;

// Lettres/chiffres Unicode, espaces et ponctuation courante
static ALLOWED_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[\p{L}\p{N}\s\-_.,!?@\#$%\&*()+=\[\]{}|\\:";'<>/]+$"#)
        .expect("charset regex is valid")
});

// Motifs d'injection SQL, nommés pour le détail de l'erreur
static INJECTION_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("sql_comment", r"--|/\*|\*/"),
        ("statement_chaining", r";\s*\w"),
        ("tautology", r#"(?i)['"]\s*(or|and)\s+['"]?\w+['"]?\s*=\s*['"]?\w+|\b(or|and)\s+\d+\s*=\s*\d+"#),
        (
            "sql_keyword",
            r"(?i)\b(union\s+(all\s+)?select|select\s+.+\s+from|insert\s+into|update\s+\w+\s+set|delete\s+from|drop\s+(table|database)|truncate\s+table|alter\s+table)\b",
        ),
        ("stored_procedure", r"(?i)\b(exec|execute|xp_cmdshell)\s*\("),
        ("time_based", r"(?i)\b(sleep|benchmark|pg_sleep)\s*\(|\bwaitfor\s+delay\b"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("injection regex is valid")))
    .collect()
});

/// Validation pure d'un terme de recherche contre les bornes du jeu de règles.
///
/// Ordre des contrôles : type, vide, longueur, injection, jeu de caractères.
/// Le premier échec court-circuite les suivants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTermValidator {
    min_length: usize,
    max_length: usize,
}

impl SearchTermValidator {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self { min_length, max_length }
    }

    pub fn from_rules(rules: &SearchRules) -> Self {
        Self::new(rules.min_search_length, rules.max_search_length)
    }

    /// Entrée non typée (ex: corps JSON) : tout ce qui n'est pas une chaîne est rejeté
    pub fn validate_json(&self, raw: &Value) -> Result<SearchTerm, SearchTermError> {
        match raw {
            Value::String(term) => self.validate(term),
            _ => Err(SearchTermError::InvalidType),
        }
    }

    pub fn validate(&self, raw: &str) -> Result<SearchTerm, SearchTermError> {
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(SearchTermError::EmptyTerm);
        }

        let current = normalized.chars().count();
        if current < self.min_length {
            return Err(SearchTermError::TooShort { current, min: self.min_length });
        }
        if current > self.max_length {
            return Err(SearchTermError::TooLong { current, max: self.max_length });
        }

        let patterns = detect_injection(normalized);
        if !patterns.is_empty() {
            return Err(SearchTermError::SecurityThreat { patterns });
        }

        if !ALLOWED_CHARSET.is_match(normalized) {
            return Err(SearchTermError::InvalidCharacters);
        }

        Ok(SearchTerm::from_normalized(normalized))
    }
}

fn detect_injection(term: &str) -> Vec<&'static str> {
    INJECTION_PATTERNS
        .iter()
        .filter(|(_, regex)| regex.is_match(term))
        .map(|(name, _)| *name)
        .collect()
}
