//! In-memory adapters
//!
//! A map-backed WebinarRepository used by unit tests and router-level
//! tests. The lock satisfies `Send + Sync`; there is no business-level
//! atomicity across requests, same as the persistent adapter.

pub mod webinar_repo;

pub use webinar_repo::InMemoryWebinarRepository;
