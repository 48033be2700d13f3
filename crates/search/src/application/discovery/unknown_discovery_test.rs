#[cfg(test)]
mod tests {
    use crate::application::discovery::{CandidateDiscovery, SearchContext, UnknownDiscovery};
    use crate::config::SearchConfig;
    use crate::domain::entities::Requester;
    use crate::domain::value_objects::{CandidateKind, SearchTerm, SubscriptionStatus};
    use crate::utils::StubSocialGraph;
    use shared_kernel::errors::DomainError;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn setup(graph: &StubSocialGraph, config: SearchConfig) -> UnknownDiscovery {
        UnknownDiscovery::from_repositories(&graph.repositories(), Arc::new(config))
    }

    #[tokio::test]
    async fn test_prefix_match_excludes_requester_blocked_and_deleted() {
        // Arrange
        let graph = StubSocialGraph::new();
        let me = graph.add_user("annie");
        let anna = graph.add_user("anna");
        let banned = graph.add_user("annabel");
        let gone = graph.add_user("annette");
        graph.add_user("joanna");
        graph.update_profile(&banned, |p| p.blocked = true);
        graph.update_profile(&gone, |p| p.deleted = true);

        let ctx = SearchContext::new(Requester::new(me, false), SearchTerm::from_normalized("ann"));

        // Act
        let candidates = setup(&graph, SearchConfig::default()).discover(&ctx).await.unwrap();

        // Assert : "joanna" ne commence pas par "ann"
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].candidate_id, anna);
        assert_eq!(candidates[0].match_weight, 0.0);
    }

    #[tokio::test]
    async fn test_prefix_matches_any_word_of_the_username() {
        // Arrange
        let graph = StubSocialGraph::new();
        let me = graph.add_user("me");
        let dotted = graph.add_user("john.doe");
        let underscored = graph.add_user("Jane_Doe");
        graph.add_user("johndoe");

        let ctx = SearchContext::new(Requester::new(me, false), SearchTerm::from_normalized("doe"));

        // Act
        let candidates = setup(&graph, SearchConfig::default()).discover(&ctx).await.unwrap();

        // Assert : "johndoe" n'a pas de mot commençant par "doe"
        let found: HashSet<_> = candidates.into_iter().map(|c| c.candidate_id).collect();
        assert_eq!(found, HashSet::from([dotted, underscored]));
    }

    #[tokio::test]
    async fn test_results_are_capped_and_carry_requester_premium_status() {
        let graph = StubSocialGraph::new();
        let me = graph.add_user("me");
        graph.subscribe(me, SubscriptionStatus::Active);
        for i in 0..10 {
            graph.add_user(&format!("sam{i}"));
        }
        let mut config = SearchConfig::default();
        config.rules.max_unknown_candidates = 4;
        let discovery = setup(&graph, config);

        let ctx = SearchContext::new(Requester::new(me, false), SearchTerm::from_normalized("sam"));
        let candidates = discovery.discover(&ctx).await.unwrap();

        assert_eq!(candidates.len(), 4);
        assert!(candidates.iter().all(|c| c.is_premium_subscriber));
        assert_eq!(discovery.kind(), CandidateKind::Unknown);
    }

    #[tokio::test]
    async fn test_discovery_is_idempotent_as_a_set() {
        let graph = StubSocialGraph::new();
        let me = graph.add_user("me");
        for name in ["kim", "kimberly", "kimi", "tom"] {
            graph.add_user(name);
        }
        let discovery = setup(&graph, SearchConfig::default());
        let ctx = SearchContext::new(Requester::new(me, false), SearchTerm::from_normalized("kim"));

        let first: HashSet<_> = discovery.discover(&ctx).await.unwrap().into_iter().map(|c| c.candidate_id).collect();
        let second: HashSet<_> = discovery.discover(&ctx).await.unwrap().into_iter().map(|c| c.candidate_id).collect();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_store_failure_is_propagated() {
        let graph = StubSocialGraph::new();
        let me = graph.add_user("me");
        graph.users.search_behavior.fail_with(DomainError::Infrastructure("db down".into()));

        let ctx = SearchContext::new(Requester::new(me, false), SearchTerm::empty());
        let result = setup(&graph, SearchConfig::default()).discover(&ctx).await;

        assert_eq!(result, Err(DomainError::Infrastructure("db down".into())));
    }
}
