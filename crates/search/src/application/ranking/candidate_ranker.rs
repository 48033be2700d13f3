// crates/search/src/application/ranking/candidate_ranker.rs

use std::sync::Arc;
use crate::config::{SearchConfig, SearchRules};
use crate::domain::entities::{HydratedCandidate, RankedCandidate};
use crate::domain::value_objects::{CandidateKind, Criterion};

/// Score = poids de la relation + somme des poids des critères vrais.
///
/// Tri décroissant stable : à score égal l'ordre de découverte est conservé.
pub struct CandidateRanker {
    config: Arc<SearchConfig>,
}

impl CandidateRanker {
    pub fn new(config: Arc<SearchConfig>) -> Self {
        Self { config }
    }

    pub fn rank(&self, candidates: Vec<HydratedCandidate>, kind: CandidateKind) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let score = self.score(&candidate, kind);
                RankedCandidate::new(candidate, score)
            })
            .collect();

        ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
        ranked
    }

    pub fn score(&self, candidate: &HydratedCandidate, kind: CandidateKind) -> f64 {
        let rules = &self.config.rules;

        self.config
            .weights
            .for_kind(kind)
            .iter()
            .filter(|(criterion, _)| evaluate(*criterion, candidate, rules) == Some(true))
            .fold(candidate.match_weight, |score, (_, entry)| score + entry.weight)
    }
}

/// `None` : le critère ne s'applique pas à ce candidat et ne compte pas
fn evaluate(criterion: Criterion, candidate: &HydratedCandidate, rules: &SearchRules) -> Option<bool> {
    match criterion {
        Criterion::Verified => Some(candidate.verified),
        Criterion::Muted => Some(candidate.muted),
        Criterion::Blocked => Some(candidate.blocked),
        Criterion::IsPremium => Some(candidate.is_premium_subscriber),
        Criterion::YouFollow => candidate.requester_follows,
        Criterion::FollowYou => candidate.follows_requester,
        Criterion::YouBlock => candidate.requester_blocks_candidate,
        Criterion::BlockYou => candidate.candidate_blocks_requester,
        Criterion::Nearby => candidate.distance_km.map(|d| d <= rules.nearby_radius_km),
        Criterion::Popular => Some(candidate.follower_count >= rules.popular_follower_threshold),
    }
}
