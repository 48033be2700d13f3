use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::AccountId;

/// L'utilisateur qui effectue la recherche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    id: AccountId,
    is_premium_subscriber: bool,
}

impl Requester {
    pub fn new(id: AccountId, is_premium_subscriber: bool) -> Self {
        Self { id, is_premium_subscriber }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn is_premium_subscriber(&self) -> bool {
        self.is_premium_subscriber
    }
}
