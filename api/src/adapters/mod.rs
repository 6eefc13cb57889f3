//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod memory;
pub mod postgres;
pub mod system;

pub use memory::InMemoryWebinarRepository;
pub use postgres::PostgresWebinarRepository;
pub use system::{SystemClock, UuidIdGenerator};
