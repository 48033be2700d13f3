use shared_kernel::domain::value_objects::{AccountId, Username};
use crate::domain::entities::HydratedCandidate;
use crate::domain::value_objects::CandidateKind;

/// Candidat hydraté neutre : aucun critère vrai, champs propres au type à `Some(false)`
pub fn hydrated_candidate(kind: CandidateKind, username: &str, match_weight: f64) -> HydratedCandidate {
    let related = kind == CandidateKind::Related;
    let unknown_flag = (!related).then_some(false);

    HydratedCandidate {
        candidate_id: AccountId::new(),
        kind,
        username: Username::from_raw(username),
        display_name: username.to_string(),
        verified: false,
        muted: false,
        blocked: false,
        profile_picture: None,
        follower_count: 0,
        match_weight,
        is_premium_subscriber: false,
        requester_follows: related.then_some(false),
        follows_requester: unknown_flag,
        requester_blocks_candidate: unknown_flag,
        candidate_blocks_requester: unknown_flag,
        distance_km: None,
    }
}
