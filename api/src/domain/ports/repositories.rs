//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (PostgreSQL for production,
//! in-memory for tests and router-level tests).

use async_trait::async_trait;

use crate::domain::entities::{Webinar, WebinarId};
use crate::error::DomainError;

/// Repository for Webinar entities
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Store a new webinar.
    ///
    /// Fails with `DomainError::AlreadyExists` when the id is already taken.
    async fn create(&self, webinar: &Webinar) -> Result<(), DomainError>;

    /// Overwrite the stored state for the webinar's id with its current
    /// field values. Fails with `DomainError::WebinarNotFound` when no row
    /// exists for the id.
    async fn update(&self, webinar: &Webinar) -> Result<(), DomainError>;

    /// Find a webinar by ID. Absence is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, DomainError>;
}
