// crates/search/src/application/discovery/related_discovery.rs

use async_trait::async_trait;
use futures::future::try_join_all;
use shared_kernel::errors::{DomainError, Result};
use std::collections::HashSet;
use std::sync::Arc;
use crate::application::discovery::requester_premium::resolve_requester_premium;
use crate::application::discovery::{CandidateDiscovery, SearchContext};
use crate::config::{SearchConfig, SearchRules};
use crate::domain::entities::{RawCandidate, RelationEdge, UserIdentity};
use crate::domain::repositories::{RelationRepository, SearchRepositories, SubscriptionRepository, UserRepository};
use crate::domain::value_objects::{CandidateKind, SearchTerm};

/// Candidats atteignables par une arête pondérée du graphe social
pub struct RelatedDiscovery {
    relations: Arc<dyn RelationRepository>,
    users: Arc<dyn UserRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    config: Arc<SearchConfig>,
}

impl RelatedDiscovery {
    pub fn new(
        relations: Arc<dyn RelationRepository>,
        users: Arc<dyn UserRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        config: Arc<SearchConfig>,
    ) -> Self {
        Self { relations, users, subscriptions, config }
    }

    pub fn from_repositories(repos: &SearchRepositories, config: Arc<SearchConfig>) -> Self {
        Self::new(
            repos.relations.clone(),
            repos.users.clone(),
            repos.subscriptions.clone(),
            config,
        )
    }

    /// Une arête vers un utilisateur inexistant est une incohérence de données
    async fn resolve_identity(&self, edge: &RelationEdge) -> Result<UserIdentity> {
        self.users
            .fetch_identity(&edge.target)
            .await?
            .ok_or_else(|| {
                tracing::error!(
                    source = %edge.source,
                    target = %edge.target,
                    "💥 Relation points to a missing user"
                );
                DomainError::DataConsistency {
                    entity: "User",
                    id: edge.target.to_string(),
                    reason: format!("relation from {} points to a missing user", edge.source),
                }
            })
    }
}

#[async_trait]
impl CandidateDiscovery for RelatedDiscovery {
    fn kind(&self) -> CandidateKind {
        CandidateKind::Related
    }

    async fn discover(&self, context: &SearchContext) -> Result<Vec<RawCandidate>> {
        let rules = &self.config.rules;
        let requester_id = context.requester.id();

        let edges = self
            .relations
            .fetch_strongest(requester_id, rules.min_relation_weight, rules.max_related_candidates)
            .await?;

        let (is_premium, identities) = tokio::try_join!(
            resolve_requester_premium(self.subscriptions.as_ref(), &context.requester),
            try_join_all(edges.iter().map(|edge| self.resolve_identity(edge))),
        )?;

        let matching = edges
            .iter()
            .zip(identities)
            .filter(|(_, identity)| context.term.matches(&identity.username))
            .map(|(edge, identity)| RawCandidate {
                candidate_id: identity.id,
                username: identity.username,
                match_weight: edge.weight,
                is_premium_subscriber: is_premium,
            })
            .collect();

        let shortlisted = shortlist(matching, &context.term, rules);

        tracing::debug!(
            requester = %requester_id,
            edges = edges.len(),
            candidates = shortlisted.len(),
            "🔗 Related candidates discovered"
        );

        Ok(shortlisted)
    }
}

/// Dédoublonnage, plafond premium, tri par poids décroissant, troncature à la page.
///
/// Le tri est stable : à poids égal l'ordre de découverte est conservé.
pub(crate) fn shortlist(
    candidates: Vec<RawCandidate>,
    term: &SearchTerm,
    rules: &SearchRules,
) -> Vec<RawCandidate> {
    let mut seen = HashSet::new();
    let unique = candidates.into_iter().filter(|c| seen.insert(c.candidate_id));

    let (mut premium, regular): (Vec<_>, Vec<_>) = unique.partition(|c| c.is_premium_subscriber);

    if premium.len() > rules.max_premium_users_per_page {
        sort_by_weight_desc(&mut premium);
        premium.truncate(rules.max_premium_users_per_page);
    }

    let mut page: Vec<_> = premium.into_iter().chain(regular).collect();
    sort_by_weight_desc(&mut page);
    page.retain(|c| term.matches(&c.username));
    page.truncate(rules.max_results_per_page);
    page
}

fn sort_by_weight_desc(candidates: &mut [RawCandidate]) {
    candidates.sort_by(|a, b| b.match_weight.total_cmp(&a.match_weight));
}
