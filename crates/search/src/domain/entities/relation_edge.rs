use shared_kernel::domain::value_objects::AccountId;

/// Arête pondérée du graphe social (source -> target)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelationEdge {
    pub source: AccountId,
    pub target: AccountId,
    pub weight: f64,
}
