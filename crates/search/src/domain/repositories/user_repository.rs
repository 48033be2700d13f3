// crates/search/src/domain/repositories/user_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use crate::domain::entities::{UserIdentity, UserProfile};
use crate::domain::value_objects::SearchTerm;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn fetch_identity(&self, id: &AccountId) -> Result<Option<UserIdentity>>;

    /// Profil + statistiques + photo en une lecture
    async fn fetch_profile(&self, id: &AccountId) -> Result<Option<UserProfile>>;

    /// Correspondance textuelle sur le username : préfixe de l'un de ses mots
    /// (séparés par `.` ou `_`), insensible à la casse.
    /// Exclut `excluded`, les comptes bloqués et les comptes supprimés. Au plus `limit`.
    /// Un terme vide ne filtre pas le texte.
    async fn search_by_username(
        &self,
        term: &SearchTerm,
        excluded: &AccountId,
        limit: usize,
    ) -> Result<Vec<UserIdentity>>;
}
