use crate::domain::entities::{RankedCandidate, Requester};

/// Dernière passe de visibilité avant la réponse
#[derive(Debug, Default, Clone, Copy)]
pub struct SecurityFilter;

impl SecurityFilter {
    /// Retire les comptes bloqués par la modération, tout blocage entre les deux parties
    /// et le demandeur lui-même. L'ordre est conservé.
    pub fn filter(&self, candidates: Vec<RankedCandidate>, requester: &Requester) -> Vec<RankedCandidate> {
        let before = candidates.len();

        let visible: Vec<RankedCandidate> = candidates
            .into_iter()
            .filter(|c| {
                let candidate = c.candidate();
                !candidate.blocked && !candidate.has_block_relation() && c.id() != requester.id()
            })
            .collect();

        if visible.len() < before {
            tracing::debug!(removed = before - visible.len(), "🛡️ Candidates hidden by security filter");
        }
        visible
    }
}
