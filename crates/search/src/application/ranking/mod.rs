mod candidate_ranker;

pub use candidate_ranker::CandidateRanker;

#[cfg(test)]
mod candidate_ranker_test;
