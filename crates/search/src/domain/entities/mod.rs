mod hydrated_candidate;
mod ranked_candidate;
mod raw_candidate;
mod relation_edge;
mod requester;
mod user;

pub use hydrated_candidate::HydratedCandidate;
pub use ranked_candidate::RankedCandidate;
pub use raw_candidate::RawCandidate;
pub use relation_edge::RelationEdge;
pub use requester::Requester;
pub use user::{UserIdentity, UserProfile};
