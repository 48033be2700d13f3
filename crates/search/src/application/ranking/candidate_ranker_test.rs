#[cfg(test)]
mod tests {
    use crate::application::ranking::CandidateRanker;
    use crate::config::{CriterionWeight, SearchConfig, WeightTable};
    use crate::domain::value_objects::{CandidateKind, Criterion, Sentiment};
    use crate::utils::hydrated_candidate;
    use std::sync::Arc;

    fn positive(weight: f64) -> CriterionWeight {
        CriterionWeight { weight, sentiment: Sentiment::Positive }
    }

    fn negative(weight: f64) -> CriterionWeight {
        CriterionWeight { weight, sentiment: Sentiment::Negative }
    }

    fn ranker(related: WeightTable, unknown: WeightTable) -> CandidateRanker {
        let mut config = SearchConfig::default();
        config.weights.related = related;
        config.weights.unknown = unknown;
        CandidateRanker::new(Arc::new(config))
    }

    #[test]
    fn test_score_adds_weights_of_true_criteria_to_base_weight() {
        let ranker = ranker(
            WeightTable::new([
                (Criterion::Verified, positive(5.0)),
                (Criterion::YouFollow, positive(20.0)),
                (Criterion::Muted, negative(-10.0)),
            ]),
            WeightTable::default(),
        );
        let mut candidate = hydrated_candidate(CandidateKind::Related, "ann", 40.0);
        candidate.verified = true;
        candidate.requester_follows = Some(true);

        assert_eq!(ranker.score(&candidate, CandidateKind::Related), 65.0);

        candidate.muted = true;
        assert_eq!(ranker.score(&candidate, CandidateKind::Related), 55.0);
    }

    #[test]
    fn test_criteria_that_do_not_apply_are_ignored() {
        let ranker = ranker(
            WeightTable::new([
                (Criterion::FollowYou, positive(15.0)),
                (Criterion::Nearby, positive(8.0)),
            ]),
            WeightTable::default(),
        );
        let candidate = hydrated_candidate(CandidateKind::Related, "ann", 12.0);

        // Pas de follow_you ni de distance sur un candidat related
        assert_eq!(ranker.score(&candidate, CandidateKind::Related), 12.0);
    }

    #[test]
    fn test_derived_criteria_use_rule_thresholds() {
        let ranker = ranker(
            WeightTable::default(),
            WeightTable::new([
                (Criterion::Nearby, positive(8.0)),
                (Criterion::Popular, positive(4.0)),
                (Criterion::BlockYou, negative(-50.0)),
            ]),
        );
        let mut near = hydrated_candidate(CandidateKind::Unknown, "near", 0.0);
        near.distance_km = Some(3.2);
        near.follower_count = 1000;
        let mut far = hydrated_candidate(CandidateKind::Unknown, "far", 0.0);
        far.distance_km = Some(400.0);
        far.candidate_blocks_requester = Some(true);

        assert_eq!(ranker.score(&near, CandidateKind::Unknown), 12.0);
        assert_eq!(ranker.score(&far, CandidateKind::Unknown), -50.0);
    }

    #[test]
    fn test_weight_table_is_chosen_by_candidate_kind() {
        let ranker = ranker(
            WeightTable::new([(Criterion::Verified, positive(1.0))]),
            WeightTable::new([(Criterion::Verified, positive(100.0))]),
        );
        let mut candidate = hydrated_candidate(CandidateKind::Unknown, "v", 0.0);
        candidate.verified = true;

        assert_eq!(ranker.score(&candidate, CandidateKind::Unknown), 100.0);
        assert_eq!(ranker.score(&candidate, CandidateKind::Related), 1.0);
    }

    #[test]
    fn test_rank_sorts_descending_and_keeps_ties_in_discovery_order() {
        let ranker = ranker(
            WeightTable::new([(Criterion::Verified, positive(10.0))]),
            WeightTable::default(),
        );
        let a = hydrated_candidate(CandidateKind::Related, "a", 30.0);
        let b = hydrated_candidate(CandidateKind::Related, "b", 20.0);
        let mut c = hydrated_candidate(CandidateKind::Related, "c", 20.0);
        c.verified = true;
        let d = hydrated_candidate(CandidateKind::Related, "d", 30.0);
        let e = hydrated_candidate(CandidateKind::Related, "e", 20.0);

        let ranked = ranker.rank(vec![a, b, c.clone(), d, e], CandidateKind::Related);

        let order: Vec<&str> = ranked.iter().map(|r| r.candidate().username.as_str()).collect();
        // a, c, d à 30 (ordre d'origine), puis b, e à 20
        assert_eq!(order, vec!["a", "c", "d", "b", "e"]);
        assert_eq!(ranked[1].score(), 30.0);
        assert_eq!(ranked[1].id(), &c.candidate_id);
    }

    #[test]
    fn test_serialized_shape_hides_internal_flags() {
        let ranker = ranker(WeightTable::default(), WeightTable::default());
        let mut candidate = hydrated_candidate(CandidateKind::Unknown, "ann", 0.0);
        candidate.distance_km = Some(1.5);

        let ranked = ranker.rank(vec![candidate], CandidateKind::Unknown);
        let json = serde_json::to_value(&ranked[0]).unwrap();

        assert_eq!(json["username"], "ann");
        assert_eq!(json["kind"], "unknown");
        assert_eq!(json["score"], 0.0);
        assert_eq!(json["distance_km"], 1.5);
        assert_eq!(json["follows_you"], false);
        assert!(json.get("you_follow").is_none());
        assert!(json.get("requester_blocks_candidate").is_none());
        assert!(json.get("match_weight").is_none());
    }
}
