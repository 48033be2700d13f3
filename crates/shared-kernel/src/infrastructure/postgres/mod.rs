// crates/shared-kernel/src/infrastructure/postgres/mod.rs

mod factories;
mod mappers;

pub use factories::{create_postgres_pool, DbConfig};
pub use mappers::SqlxErrorExt;
