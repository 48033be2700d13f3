use serde::Serialize;
use shared_kernel::domain::value_objects::AccountId;
use crate::domain::entities::HydratedCandidate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    candidate: HydratedCandidate,
    score: f64,
}

impl RankedCandidate {
    pub(crate) fn new(candidate: HydratedCandidate, score: f64) -> Self {
        Self { candidate, score }
    }

    pub fn id(&self) -> &AccountId {
        &self.candidate.candidate_id
    }

    pub fn candidate(&self) -> &HydratedCandidate {
        &self.candidate
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}
