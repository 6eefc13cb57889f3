//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{User, UserId, Webinar, WebinarId};

/// Fixed "current time" used by the deterministic clock in tests
pub const TEST_NOW: &str = "2024-01-01T00:00:00Z";

/// The organizer used across seat-change tests
pub fn test_user_alice() -> User {
    User {
        id: UserId::new("alice"),
        email: "alice@gmail.com".to_string(),
        password: "azerty".to_string(),
    }
}

/// A user who does not own any test webinar
pub fn test_user_bob() -> User {
    User {
        id: UserId::new("bob"),
        email: "bob@gmail.com".to_string(),
        password: "azerty".to_string(),
    }
}

/// A webinar owned by alice with 100 seats
pub fn test_webinar() -> Webinar {
    Webinar {
        id: WebinarId::new("webinar-id"),
        organizer_id: test_user_alice().id,
        title: "Webinar title".to_string(),
        start_date: "2024-01-01T00:00:00Z".parse().unwrap(),
        end_date: "2024-01-01T01:00:00Z".parse().unwrap(),
        seats: 100,
    }
}
