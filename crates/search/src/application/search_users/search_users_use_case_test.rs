#[cfg(test)]
mod tests {
    use crate::application::discovery::{CandidateDiscovery, SearchContext, UnknownDiscovery};
    use crate::application::search_users::{BranchStatus, SearchPhase, SearchUsersQuery, SearchUsersUseCase};
    use crate::config::SearchConfig;
    use crate::domain::entities::{RawCandidate, Requester};
    use crate::domain::value_objects::CandidateKind;
    use crate::utils::StubSocialGraph;
    use async_trait::async_trait;
    use shared_kernel::application::QueryHandler;
    use shared_kernel::domain::value_objects::AccountId;
    use shared_kernel::errors::{DomainError, Result};
    use std::sync::Arc;
    use std::time::Duration;

    /// Branche qui ne se termine jamais
    struct PendingDiscovery;

    #[async_trait]
    impl CandidateDiscovery for PendingDiscovery {
        fn kind(&self) -> CandidateKind {
            CandidateKind::Related
        }

        async fn discover(&self, _context: &SearchContext) -> Result<Vec<RawCandidate>> {
            std::future::pending().await
        }
    }

    fn located(graph: &StubSocialGraph, name: &str) -> AccountId {
        let id = graph.add_user(name);
        graph.locate(id, 48.85, 2.35);
        id
    }

    fn config(timeout_ms: u64) -> SearchConfig {
        let mut config = SearchConfig::default();
        config.rules.timeout_ms = timeout_ms;
        config
    }

    fn query(me: AccountId, term: &str) -> SearchUsersQuery {
        SearchUsersQuery {
            search_term: term.to_string(),
            requester: Requester::new(me, false),
        }
    }

    fn names(outcome: &crate::application::search_users::SearchOutcome) -> Vec<String> {
        outcome
            .results
            .iter()
            .map(|c| c.candidate().username.as_str().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_search_merges_both_branches_by_score() {
        // Arrange
        let graph = StubSocialGraph::new();
        let me = located(&graph, "me");
        let close_friend = located(&graph, "alex");
        let acquaintance = located(&graph, "alexia");
        located(&graph, "alexandre");
        graph.relate(me, close_friend, 80.0);
        graph.relate(me, acquaintance, 20.0);
        let use_case = SearchUsersUseCase::new(graph.repositories(), Arc::new(config(1_000)));

        // Act
        let outcome = use_case.execute(query(me, "  alex ")).await.unwrap();

        // Assert : les deux related en tête, l'inconnu (poids 0) ensuite, sans doublon
        assert_eq!(outcome.term.as_str(), "alex");
        assert_eq!(names(&outcome), vec!["alex", "alexia", "alexandre"]);
        assert_eq!(outcome.related, BranchStatus::Completed { count: 2 });
        assert_eq!(outcome.unknown, BranchStatus::Completed { count: 3 });
        assert_eq!(outcome.phase, SearchPhase::Done);
        assert_eq!(outcome.results[0].candidate().kind, CandidateKind::Related);
    }

    #[tokio::test]
    async fn test_branch_that_never_resolves_contributes_nothing() {
        let graph = StubSocialGraph::new();
        let me = located(&graph, "me");
        located(&graph, "zoe");
        let popular = located(&graph, "zoey");
        graph.update_profile(&popular, |p| p.follower_count = 50_000);

        let config = Arc::new(config(50));
        let repos = graph.repositories();
        let unknown = Arc::new(UnknownDiscovery::from_repositories(&repos, config.clone()));
        let use_case = SearchUsersUseCase::with_discoveries(repos, config, Arc::new(PendingDiscovery), unknown);

        let outcome = tokio::time::timeout(Duration::from_secs(2), use_case.execute(query(me, "zo")))
            .await
            .expect("the search itself must not hang")
            .unwrap();

        assert_eq!(outcome.related, BranchStatus::TimedOut { after_ms: 50 });
        assert_eq!(outcome.unknown, BranchStatus::Completed { count: 2 });
        // "zoey" est populaire : classée devant "zoe"
        assert_eq!(names(&outcome), vec!["zoey", "zoe"]);
    }

    #[tokio::test]
    async fn test_failing_branch_degrades_to_empty_contribution() {
        let graph = StubSocialGraph::new();
        let me = located(&graph, "me");
        located(&graph, "max");
        graph.relations.behavior.fail_with(DomainError::Infrastructure("db down".into()));
        let use_case = SearchUsersUseCase::new(graph.repositories(), Arc::new(config(1_000)));

        let outcome = use_case.execute(query(me, "max")).await.unwrap();

        assert!(matches!(outcome.related, BranchStatus::Failed { ref reason } if reason.contains("db down")));
        assert_eq!(names(&outcome), vec!["max"]);
    }

    #[tokio::test]
    async fn test_both_branches_failing_yields_empty_results() {
        let graph = StubSocialGraph::new();
        let me = located(&graph, "me");
        located(&graph, "max");
        graph.relations.behavior.fail_with(DomainError::Infrastructure("down".into()));
        graph.users.search_behavior.fail_with(DomainError::Infrastructure("down".into()));
        let use_case = SearchUsersUseCase::new(graph.repositories(), Arc::new(config(1_000)));

        let outcome = use_case.execute(query(me, "max")).await.unwrap();

        assert!(outcome.results.is_empty());
        assert!(!outcome.related.is_completed() && !outcome.unknown.is_completed());
        assert_eq!(outcome.phase, SearchPhase::Done);
    }

    #[tokio::test]
    async fn test_invalid_term_degrades_to_no_textual_filter() {
        let graph = StubSocialGraph::new();
        let me = located(&graph, "me");
        located(&graph, "ana");
        located(&graph, "bruno");
        let use_case = SearchUsersUseCase::new(graph.repositories(), Arc::new(config(1_000)));

        let outcome = use_case.execute(query(me, "   ")).await.unwrap();

        assert!(outcome.term.is_empty());
        assert_eq!(names(&outcome), vec!["ana", "bruno"]);
    }

    #[tokio::test]
    async fn test_invalid_term_is_rejected_when_configured() {
        let graph = StubSocialGraph::new();
        let me = located(&graph, "me");
        let mut config = config(1_000);
        config.rules.reject_invalid_terms = true;
        let use_case = SearchUsersUseCase::new(graph.repositories(), Arc::new(config));

        let result = use_case.handle(query(me, "x'; DROP TABLE users")).await;

        match result {
            Err(DomainError::InvalidInput { field, code, details, .. }) => {
                assert_eq!(field, "search_term");
                assert_eq!(code, "SEARCH_SECURITY_THREAT");
                let details = details.expect("detected patterns");
                assert!(details["detected_patterns"].as_array().is_some_and(|p| !p.is_empty()));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejected_short_term_keeps_length_details() {
        let graph = StubSocialGraph::new();
        let me = located(&graph, "me");
        let mut config = config(1_000);
        config.rules.reject_invalid_terms = true;
        config.rules.min_search_length = 3;
        let use_case = SearchUsersUseCase::new(graph.repositories(), Arc::new(config));

        let err = use_case.execute(query(me, "ab")).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::InvalidInput {
                field: "search_term",
                code: "SEARCH_TOO_SHORT",
                message: "Search term must be at least 3 character(s)".into(),
                details: Some(serde_json::json!({ "current_length": 2, "minimum_length": 3 })),
            }
        );
    }

    #[tokio::test]
    async fn test_blocked_candidates_are_filtered_out() {
        let graph = StubSocialGraph::new();
        let me = located(&graph, "me");
        let hater = located(&graph, "kai");
        let banned = located(&graph, "kaia");
        located(&graph, "kaiden");
        graph.block(hater, me);
        graph.relate(me, banned, 90.0);
        graph.update_profile(&banned, |p| p.blocked = true);
        let use_case = SearchUsersUseCase::new(graph.repositories(), Arc::new(config(1_000)));

        let outcome = use_case.execute(query(me, "kai")).await.unwrap();

        assert_eq!(names(&outcome), vec!["kaiden"]);
    }

    #[tokio::test]
    async fn test_timeout_stops_hydration_before_next_wave() {
        // Arrange : 10 lots d'un candidat, une vague à la fois, 30 ms par profil
        let graph = StubSocialGraph::new();
        let me = located(&graph, "me");
        for i in 0..10 {
            located(&graph, &format!("slow{i}"));
        }
        graph.users.behavior.delay_by(Duration::from_millis(30));
        let mut config = config(50);
        config.rules.batch_size = 1;
        config.rules.max_concurrent_batches = 1;
        let use_case = SearchUsersUseCase::new(graph.repositories(), Arc::new(config));

        // Act
        let outcome = use_case.execute(query(me, "slow")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;

        // Assert
        assert_eq!(outcome.unknown, BranchStatus::TimedOut { after_ms: 50 });
        assert!(outcome.results.is_empty());
        assert!(graph.users.behavior.calls() < 10);
    }
}
