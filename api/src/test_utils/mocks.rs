//! Mock implementations of port traits
//!
//! Deterministic id and clock sources so use-case tests control what
//! `generate()` and `now()` return.

use chrono::{DateTime, Utc};

use crate::domain::entities::WebinarId;
use crate::domain::ports::{Clock, IdGenerator};

/// Id generator that always returns the same id
pub struct FixedIdGenerator {
    id: String,
}

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> WebinarId {
        WebinarId::new(self.id.clone())
    }
}

/// Clock frozen at a fixed instant
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze the clock at an RFC 3339 instant; panics on a malformed one
    pub fn at(instant: &str) -> Self {
        Self {
            now: instant.parse().expect("valid RFC 3339 instant"),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
