//! Id and date generation ports
//!
//! The use cases never touch `Uuid::new_v4` or the system clock directly;
//! both come in through these traits so tests stay deterministic.

use chrono::{DateTime, Utc};

use crate::domain::entities::WebinarId;

/// Source of globally unique webinar ids
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> WebinarId;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
