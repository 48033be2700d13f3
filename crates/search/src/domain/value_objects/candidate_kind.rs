use serde::{Deserialize, Serialize};
use std::fmt;

/// Origine d'un candidat : graphe social (related) ou simple correspondance textuelle (unknown)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Related,
    Unknown,
}

impl CandidateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Related => "related",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
