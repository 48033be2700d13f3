mod query;

pub use query::QueryHandler;
