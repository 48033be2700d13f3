mod search_term_error;
mod search_term_validator;

pub use search_term_error::{SearchTermError, SearchTermErrorKind};
pub use search_term_validator::SearchTermValidator;
