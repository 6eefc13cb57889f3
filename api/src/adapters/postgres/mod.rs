//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod webinar_repo;

pub use webinar_repo::PostgresWebinarRepository;
