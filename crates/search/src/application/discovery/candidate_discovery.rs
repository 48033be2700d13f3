// crates/search/src/application/discovery/candidate_discovery.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;
use crate::application::discovery::SearchContext;
use crate::domain::entities::RawCandidate;
use crate::domain::value_objects::CandidateKind;

/// Stratégie de découverte de candidats bruts (related ou unknown).
/// Lecture seule : aucune écriture n'est émise vers le data store.
#[async_trait]
pub trait CandidateDiscovery: Send + Sync {
    fn kind(&self) -> CandidateKind;

    async fn discover(&self, context: &SearchContext) -> Result<Vec<RawCandidate>>;
}
