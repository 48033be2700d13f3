use shared_kernel::domain::value_objects::{AccountId, Username};

/// Candidat brut produit par la découverte, consommé par l'hydratation
#[derive(Debug, Clone, PartialEq)]
pub struct RawCandidate {
    pub candidate_id: AccountId,
    pub username: Username,
    /// Poids de la relation (0 pour un candidat unknown)
    pub match_weight: f64,
    /// Statut premium rattaché par la découverte (celui du demandeur, cf. DESIGN.md)
    pub is_premium_subscriber: bool,
}
