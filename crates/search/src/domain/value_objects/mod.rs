mod candidate_kind;
mod criterion;
mod search_term;
mod subscription_status;

pub use candidate_kind::CandidateKind;
pub use criterion::{Criterion, Sentiment};
pub use search_term::SearchTerm;
pub use subscription_status::SubscriptionStatus;
