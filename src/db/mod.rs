pub mod memory;
pub mod postgres;
pub mod seed;
mod storage;

pub use memory::MemoryStorage;
pub use postgres::{create_pool, PgStorage};
pub use storage::Storage;

#[cfg(test)]
pub use storage::MockStorage;
