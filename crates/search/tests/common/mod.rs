// crates/search/tests/common/mod.rs

#![allow(dead_code)]

#[cfg(feature = "postgres")]
mod setup_postgres_test_db;

#[cfg(feature = "postgres")]
#[allow(unused_imports)]
pub use setup_postgres_test_db::setup_postgres_test_db;
