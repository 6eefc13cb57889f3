//! Webinar domain entity
//!
//! Holds identity, organizer, schedule window and seat count. Construction
//! and `update` perform no validation; the use cases in the `app` layer
//! enforce the business rules before mutating.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Minimum seat count for a valid webinar
pub const MIN_SEATS: i32 = 1;

/// Maximum seat count for a valid webinar
pub const MAX_SEATS: i32 = 1000;

/// Unique identifier for a webinar (opaque, assigned at creation)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebinarId(pub String);

impl WebinarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for WebinarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled webinar with a seat capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Webinar {
    pub id: WebinarId,
    /// Owner of the webinar; never changes once persisted
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

/// Partial update merged into a webinar's in-memory state.
/// Seat count is the only mutable field in this scope.
#[derive(Debug, Clone, Default)]
pub struct WebinarUpdate {
    pub seats: Option<i32>,
}

impl Webinar {
    /// Merge the given fields into the entity's state in place.
    ///
    /// Mutates in-memory state only; callers validate first and persist
    /// through the repository afterwards.
    pub fn update(&mut self, update: WebinarUpdate) {
        if let Some(seats) = update.seats {
            self.seats = seats;
        }
    }

    /// Check whether the given user owns this webinar
    pub fn is_organizer(&self, user_id: &UserId) -> bool {
        self.organizer_id == *user_id
    }
}
