mod search_outcome;
mod search_phase;
mod search_users_query;
mod search_users_use_case;

pub use search_outcome::{BranchStatus, SearchOutcome};
pub use search_phase::SearchPhase;
pub use search_users_query::SearchUsersQuery;
pub use search_users_use_case::SearchUsersUseCase;

#[cfg(test)]
mod search_users_use_case_test;
