pub mod discovery;
pub mod hydration;
pub mod mixing;
pub mod ranking;
pub mod search_users;
pub mod validate_search_term;
