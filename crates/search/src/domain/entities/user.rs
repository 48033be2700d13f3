use shared_kernel::domain::value_objects::{AccountId, Username};

/// Identité minimale d'un utilisateur (résolution d'une arête, correspondance textuelle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: AccountId,
    pub username: Username,
}

/// Profil + statistiques agrégées, tel que lu pour l'hydratation
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: AccountId,
    pub username: Username,
    pub display_name: String,
    pub verified: bool,
    pub muted: bool,
    /// Compte bloqué par la modération
    pub blocked: bool,
    pub deleted: bool,
    pub follower_count: u64,
    pub profile_picture: Option<String>,
}

impl UserProfile {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id,
            username: self.username.clone(),
        }
    }
}
