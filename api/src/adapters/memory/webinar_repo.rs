//! In-memory adapter for WebinarRepository

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{Webinar, WebinarId};
use crate::domain::ports::WebinarRepository;
use crate::error::DomainError;

/// In-memory implementation of WebinarRepository
#[derive(Default)]
pub struct InMemoryWebinarRepository {
    webinars: Arc<RwLock<HashMap<WebinarId, Webinar>>>,
}

impl InMemoryWebinarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a webinar for testing
    pub fn with_webinar(self, webinar: Webinar) -> Self {
        {
            let mut webinars = self.webinars.write().unwrap();
            webinars.insert(webinar.id.clone(), webinar);
        }
        self
    }

    /// Read the stored state directly, bypassing the port.
    /// Lets tests assert that failed use cases left nothing behind.
    pub fn get(&self, id: &WebinarId) -> Option<Webinar> {
        self.webinars.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), DomainError> {
        let mut webinars = self.webinars.write().unwrap();
        if webinars.contains_key(&webinar.id) {
            return Err(DomainError::AlreadyExists(webinar.id.to_string()));
        }
        webinars.insert(webinar.id.clone(), webinar.clone());
        Ok(())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), DomainError> {
        let mut webinars = self.webinars.write().unwrap();
        if !webinars.contains_key(&webinar.id) {
            return Err(DomainError::WebinarNotFound);
        }
        webinars.insert(webinar.id.clone(), webinar.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, DomainError> {
        let webinars = self.webinars.read().unwrap();
        Ok(webinars.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_webinar;

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let repo = InMemoryWebinarRepository::new();
        let webinar = test_webinar();

        repo.create(&webinar).await.unwrap();

        let found = repo.find_by_id(&webinar.id).await.unwrap();
        assert_eq!(found, Some(webinar));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_id() {
        let webinar = test_webinar();
        let repo = InMemoryWebinarRepository::new().with_webinar(webinar.clone());

        let err = repo.create(&webinar).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn update_overwrites_stored_state() {
        let mut webinar = test_webinar();
        let repo = InMemoryWebinarRepository::new().with_webinar(webinar.clone());

        webinar.seats = 500;
        repo.update(&webinar).await.unwrap();

        assert_eq!(repo.get(&webinar.id).unwrap().seats, 500);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let repo = InMemoryWebinarRepository::new();
        let webinar = test_webinar();

        let err = repo.update(&webinar).await.unwrap_err();
        assert_eq!(err, DomainError::WebinarNotFound);
    }

    #[tokio::test]
    async fn find_by_id_absent_is_none() {
        let repo = InMemoryWebinarRepository::new();
        let found = repo.find_by_id(&WebinarId::new("nope")).await.unwrap();
        assert!(found.is_none());
    }
}
