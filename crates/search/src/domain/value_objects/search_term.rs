// crates/search/src/domain/value_objects/search_term.rs

use serde::Serialize;
use shared_kernel::domain::value_objects::Username;
use std::fmt;

/// Terme de recherche normalisé.
///
/// Seul le validateur peut en construire un non vide : le terme brut saisi par l'utilisateur
/// ne descend jamais jusqu'aux requêtes. Un terme vide signifie "pas de filtre textuel".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub(crate) fn from_normalized(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Filtre textuel des candidats liés : sous-chaîne du username
    pub fn matches(&self, username: &Username) -> bool {
        username.contains_fragment(&self.0)
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
