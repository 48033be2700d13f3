// crates/shared-kernel/src/infrastructure/mod.rs

pub mod concurrency;

#[cfg(feature = "postgres")]
pub mod postgres;
