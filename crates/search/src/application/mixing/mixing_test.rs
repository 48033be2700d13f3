#[cfg(test)]
mod tests {
    use crate::application::mixing::{SearchMixer, SecurityFilter};
    use crate::domain::entities::{HydratedCandidate, RankedCandidate, Requester};
    use crate::domain::value_objects::CandidateKind;
    use crate::utils::hydrated_candidate;

    fn ranked(kind: CandidateKind, name: &str, score: f64) -> RankedCandidate {
        RankedCandidate::new(hydrated_candidate(kind, name, 0.0), score)
    }

    fn names(list: &[RankedCandidate]) -> Vec<&str> {
        list.iter().map(|c| c.candidate().username.as_str()).collect()
    }

    #[test]
    fn test_mix_sorts_by_score_and_keeps_related_first_on_ties() {
        let related = vec![ranked(CandidateKind::Related, "r1", 30.0), ranked(CandidateKind::Related, "r2", 10.0)];
        let unknown = vec![ranked(CandidateKind::Unknown, "u1", 10.0), ranked(CandidateKind::Unknown, "u2", 50.0)];

        let mixed = SearchMixer.mix(related, unknown);

        assert_eq!(names(&mixed), vec!["u2", "r1", "r2", "u1"]);
    }

    #[test]
    fn test_mix_drops_unknown_duplicates_of_related_candidates() {
        let both = hydrated_candidate(CandidateKind::Related, "both", 0.0);
        let as_unknown = HydratedCandidate { kind: CandidateKind::Unknown, ..both.clone() };

        let mixed = SearchMixer.mix(
            vec![RankedCandidate::new(both, 5.0)],
            vec![RankedCandidate::new(as_unknown, 99.0), ranked(CandidateKind::Unknown, "other", 1.0)],
        );

        assert_eq!(names(&mixed), vec!["both", "other"]);
        assert_eq!(mixed[0].candidate().kind, CandidateKind::Related);
    }

    #[test]
    fn test_mix_of_empty_branch_returns_other_branch() {
        let mixed = SearchMixer.mix(Vec::new(), vec![ranked(CandidateKind::Unknown, "u", 1.0)]);

        assert_eq!(names(&mixed), vec!["u"]);
    }

    #[test]
    fn test_filter_removes_blocked_and_self() {
        let me = hydrated_candidate(CandidateKind::Unknown, "me", 0.0);
        let requester = Requester::new(me.candidate_id, false);

        let mut banned = hydrated_candidate(CandidateKind::Related, "banned", 0.0);
        banned.blocked = true;
        let mut blocked_by_me = hydrated_candidate(CandidateKind::Unknown, "blocked_by_me", 0.0);
        blocked_by_me.requester_blocks_candidate = Some(true);
        let mut blocks_me = hydrated_candidate(CandidateKind::Unknown, "blocks_me", 0.0);
        blocks_me.candidate_blocks_requester = Some(true);
        let friend = hydrated_candidate(CandidateKind::Related, "friend", 0.0);
        let stranger = hydrated_candidate(CandidateKind::Unknown, "stranger", 0.0);

        let visible = SecurityFilter.filter(
            [me, banned, friend, blocked_by_me, blocks_me, stranger]
                .into_iter()
                .map(|c| RankedCandidate::new(c, 1.0))
                .collect(),
            &requester,
        );

        assert_eq!(names(&visible), vec!["friend", "stranger"]);
    }
}
