use serde::Deserialize;
use crate::domain::entities::Requester;

/// Terme brut tel que saisi : il n'est jamais utilisé tel quel en aval de la validation
#[derive(Debug, Clone, Deserialize)]
pub struct SearchUsersQuery {
    pub search_term: String,
    pub requester: Requester,
}
