mod candidate_discovery;
mod related_discovery;
mod requester_premium;
mod search_context;
mod unknown_discovery;

pub use candidate_discovery::CandidateDiscovery;
pub use related_discovery::RelatedDiscovery;
pub use search_context::SearchContext;
pub use unknown_discovery::UnknownDiscovery;

#[cfg(test)]
mod unknown_discovery_test;
