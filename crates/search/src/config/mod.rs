mod search_config;
mod search_rules;
mod weight_table;

pub use search_config::SearchConfig;
pub use search_rules::SearchRules;
pub use weight_table::{CriterionWeight, WeightTable, WeightTables};
