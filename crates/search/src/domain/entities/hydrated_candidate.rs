// crates/search/src/domain/entities/hydrated_candidate.rs

use serde::Serialize;
use shared_kernel::domain::value_objects::{AccountId, Username};
use crate::domain::value_objects::CandidateKind;

/// Candidat enrichi : construit une seule fois par l'hydratation, jamais modifié ensuite.
///
/// Les champs `Option<bool>` ne s'appliquent qu'à un type de candidat : `None` signifie
/// "non renseigné" et le critère correspondant est ignoré au scoring.
/// Les drapeaux internes (blocages, mute, poids) ne sont pas sérialisés.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydratedCandidate {
    #[serde(rename = "id")]
    pub candidate_id: AccountId,
    pub kind: CandidateKind,
    pub username: Username,
    pub display_name: String,
    pub verified: bool,
    #[serde(skip)]
    pub muted: bool,
    #[serde(skip)]
    pub blocked: bool,
    pub profile_picture: Option<String>,
    pub follower_count: u64,
    #[serde(skip)]
    pub match_weight: f64,
    #[serde(skip)]
    pub is_premium_subscriber: bool,

    // --- Related uniquement ---
    #[serde(rename = "you_follow", skip_serializing_if = "Option::is_none")]
    pub requester_follows: Option<bool>,

    // --- Unknown uniquement ---
    #[serde(rename = "follows_you", skip_serializing_if = "Option::is_none")]
    pub follows_requester: Option<bool>,
    #[serde(skip)]
    pub requester_blocks_candidate: Option<bool>,
    #[serde(skip)]
    pub candidate_blocks_requester: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl HydratedCandidate {
    /// Blocage dans un sens ou dans l'autre entre le demandeur et ce candidat
    pub fn has_block_relation(&self) -> bool {
        self.requester_blocks_candidate.unwrap_or(false)
            || self.candidate_blocks_requester.unwrap_or(false)
    }
}
