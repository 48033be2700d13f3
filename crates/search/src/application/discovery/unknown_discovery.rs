// crates/search/src/application/discovery/unknown_discovery.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;
use std::sync::Arc;
use crate::application::discovery::requester_premium::resolve_requester_premium;
use crate::application::discovery::{CandidateDiscovery, SearchContext};
use crate::config::SearchConfig;
use crate::domain::entities::RawCandidate;
use crate::domain::repositories::{SearchRepositories, SubscriptionRepository, UserRepository};
use crate::domain::value_objects::CandidateKind;

/// Candidats trouvés par simple correspondance textuelle sur le username (poids 0)
pub struct UnknownDiscovery {
    users: Arc<dyn UserRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    config: Arc<SearchConfig>,
}

impl UnknownDiscovery {
    pub fn new(
        users: Arc<dyn UserRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        config: Arc<SearchConfig>,
    ) -> Self {
        Self { users, subscriptions, config }
    }

    pub fn from_repositories(repos: &SearchRepositories, config: Arc<SearchConfig>) -> Self {
        Self::new(repos.users.clone(), repos.subscriptions.clone(), config)
    }
}

#[async_trait]
impl CandidateDiscovery for UnknownDiscovery {
    fn kind(&self) -> CandidateKind {
        CandidateKind::Unknown
    }

    async fn discover(&self, context: &SearchContext) -> Result<Vec<RawCandidate>> {
        let requester_id = context.requester.id();

        let (matches, is_premium) = tokio::try_join!(
            self.users.search_by_username(
                &context.term,
                requester_id,
                self.config.rules.max_unknown_candidates,
            ),
            resolve_requester_premium(self.subscriptions.as_ref(), &context.requester),
        )?;

        tracing::debug!(
            requester = %requester_id,
            candidates = matches.len(),
            "🔎 Unknown candidates discovered"
        );

        Ok(matches
            .into_iter()
            .map(|identity| RawCandidate {
                candidate_id: identity.id,
                username: identity.username,
                match_weight: 0.0,
                is_premium_subscriber: is_premium,
            })
            .collect())
    }
}
