//! Organize webinar use case
//!
//! Validates and creates a webinar. The id and the current time come in
//! through ports so the use case stays deterministic under test.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{UserId, Webinar, WebinarId, MAX_SEATS, MIN_SEATS};
use crate::domain::ports::{Clock, IdGenerator, WebinarRepository};
use crate::error::{AppError, DomainError};

/// Minimum interval between creation time and the scheduled start
const MIN_LEAD_TIME_DAYS: i64 = 3;

/// Command to organize a new webinar
#[derive(Debug, Clone)]
pub struct OrganizeWebinarCommand {
    pub user_id: UserId,
    pub title: String,
    pub seats: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Result of organizing a webinar
#[derive(Debug)]
pub struct OrganizedWebinar {
    pub id: WebinarId,
}

/// Use case: validate and create a webinar
pub struct OrganizeWebinar<R, I, C>
where
    R: WebinarRepository + ?Sized,
    I: IdGenerator + ?Sized,
    C: Clock + ?Sized,
{
    webinars: Arc<R>,
    ids: Arc<I>,
    clock: Arc<C>,
}

impl<R, I, C> OrganizeWebinar<R, I, C>
where
    R: WebinarRepository + ?Sized,
    I: IdGenerator + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(webinars: Arc<R>, ids: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            webinars,
            ids,
            clock,
        }
    }

    /// Create a new webinar owned by `user_id`.
    ///
    /// Checks run in a fixed order so a command violating several rules
    /// always reports the same one: lead time, then seat upper bound,
    /// then seat lower bound.
    pub async fn execute(
        &self,
        command: OrganizeWebinarCommand,
    ) -> Result<OrganizedWebinar, AppError> {
        if command.start_date < self.clock.now() + Duration::days(MIN_LEAD_TIME_DAYS) {
            return Err(DomainError::DatesTooSoon.into());
        }
        if command.seats > MAX_SEATS {
            return Err(DomainError::TooManySeats.into());
        }
        if command.seats < MIN_SEATS {
            return Err(DomainError::NotEnoughSeats.into());
        }

        let id = self.ids.generate();
        let webinar = Webinar {
            id: id.clone(),
            organizer_id: command.user_id,
            title: command.title,
            start_date: command.start_date,
            end_date: command.end_date,
            seats: command.seats,
        };

        self.webinars.create(&webinar).await?;

        tracing::debug!(webinar_id = %id, "Webinar organized");

        Ok(OrganizedWebinar { id })
    }
}
