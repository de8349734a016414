//! Storage backends implementing [`TriviaStore`](crate::repository::TriviaStore)

pub mod memory;

#[cfg(feature = "database")]
pub mod postgres;

pub use memory::MemoryStore;

#[cfg(feature = "database")]
pub use postgres::PgStore;
