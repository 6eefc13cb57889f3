//! System adapters for the id and date generation ports

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::WebinarId;
use crate::domain::ports::{Clock, IdGenerator};

/// Production id generator backed by UUID v4
#[derive(Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> WebinarId {
        WebinarId(Uuid::new_v4().to_string())
    }
}

/// Production clock backed by the system time
#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
