use std::collections::HashSet;
use crate::domain::entities::RankedCandidate;

/// Fusion des deux flux classés
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchMixer;

impl SearchMixer {
    /// Related puis unknown ; un candidat présent dans les deux n'est gardé que côté related.
    /// Tri final stable par score décroissant.
    pub fn mix(&self, related: Vec<RankedCandidate>, unknown: Vec<RankedCandidate>) -> Vec<RankedCandidate> {
        let related_ids: HashSet<_> = related.iter().map(|c| *c.id()).collect();

        let mut mixed: Vec<RankedCandidate> = related
            .into_iter()
            .chain(unknown.into_iter().filter(|c| !related_ids.contains(c.id())))
            .collect();

        mixed.sort_by(|a, b| b.score().total_cmp(&a.score()));
        mixed
    }
}
