//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory repository itself lives in `adapters::memory` since it is
//! a first-class adapter; this module holds the deterministic generator
//! mocks and fixture factories built on top of it.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
