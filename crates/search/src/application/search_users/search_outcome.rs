use serde::Serialize;
use crate::application::search_users::SearchPhase;
use crate::domain::entities::RankedCandidate;
use crate::domain::value_objects::SearchTerm;

/// Sort d'une branche de découverte. Une branche en échec contribue une liste vide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BranchStatus {
    Completed { count: usize },
    TimedOut { after_ms: u64 },
    Failed { reason: String },
}

impl BranchStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Résultat d'une recherche. Deux branches vides donnent une liste vide valide,
/// indiscernable de "aucun résultat" sans consulter les statuts.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Terme normalisé effectivement utilisé (vide si la validation a échoué)
    pub term: SearchTerm,
    pub results: Vec<RankedCandidate>,
    pub related: BranchStatus,
    pub unknown: BranchStatus,
    pub phase: SearchPhase,
}
