use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use std::sync::Mutex;
use crate::domain::entities::{UserIdentity, UserProfile};
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::SearchTerm;
use crate::utils::stub_support::{lock, StubBehavior};

/// Profils en mémoire, dans l'ordre d'insertion
#[derive(Default)]
pub struct UserRepositoryStub {
    pub profiles: Mutex<Vec<UserProfile>>,
    /// Appliqué à `fetch_profile` uniquement (hydratation)
    pub behavior: StubBehavior,
    /// Appliqué à `search_by_username` uniquement (découverte unknown)
    pub search_behavior: StubBehavior,
}

impl UserRepositoryStub {
    fn find(&self, id: &AccountId) -> Option<UserProfile> {
        lock(&self.profiles).iter().find(|p| p.id == *id).cloned()
    }
}

#[async_trait]
impl UserRepository for UserRepositoryStub {
    async fn fetch_identity(&self, id: &AccountId) -> Result<Option<UserIdentity>> {
        Ok(self.find(id).map(|p| p.identity()))
    }

    async fn fetch_profile(&self, id: &AccountId) -> Result<Option<UserProfile>> {
        let profile = self.find(id);
        self.behavior.around(|| profile).await
    }

    async fn search_by_username(
        &self,
        term: &SearchTerm,
        excluded: &AccountId,
        limit: usize,
    ) -> Result<Vec<UserIdentity>> {
        // Préfixe d'un mot du username (séparateurs `.` et `_`), insensible à la casse
        let prefix = term.as_str().to_lowercase();
        let matches: Vec<UserIdentity> = lock(&self.profiles)
            .iter()
            .filter(|p| p.id != *excluded && !p.blocked && !p.deleted)
            .filter(|p| {
                let username = p.username.as_str().to_lowercase();
                username.starts_with(&prefix)
                    || username.split(['.', '_']).any(|word| word.starts_with(&prefix))
            })
            .take(limit)
            .map(UserProfile::identity)
            .collect();

        self.search_behavior.around(|| matches).await
    }
}
