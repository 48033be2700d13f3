mod postgres_migrations;

pub use postgres_migrations::run_search_migrations;
