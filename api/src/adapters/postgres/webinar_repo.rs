//! PostgreSQL adapter for WebinarRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};

use crate::domain::entities::{UserId, Webinar, WebinarId};
use crate::domain::ports::WebinarRepository;
use crate::entity::webinars;
use crate::error::DomainError;

/// PostgreSQL implementation of WebinarRepository
pub struct PostgresWebinarRepository {
    db: DatabaseConnection,
}

impl PostgresWebinarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WebinarRepository for PostgresWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), DomainError> {
        let model = webinars::ActiveModel {
            id: Set(webinar.id.0.clone()),
            organizer_id: Set(webinar.organizer_id.0.clone()),
            title: Set(webinar.title.clone()),
            start_date: Set(webinar.start_date.fixed_offset()),
            end_date: Set(webinar.end_date.fixed_offset()),
            seats: Set(webinar.seats),
        };

        model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                DomainError::AlreadyExists(webinar.id.to_string())
            } else {
                DomainError::Database(e.to_string())
            }
        })?;

        Ok(())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), DomainError> {
        // Schedule and organizer are immutable in the domain, but the port
        // contract is a full overwrite of the stored row.
        let model = webinars::ActiveModel {
            id: Set(webinar.id.0.clone()),
            organizer_id: Set(webinar.organizer_id.0.clone()),
            title: Set(webinar.title.clone()),
            start_date: Set(webinar.start_date.fixed_offset()),
            end_date: Set(webinar.end_date.fixed_offset()),
            seats: Set(webinar.seats),
        };

        model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::WebinarNotFound,
            e => DomainError::Database(e.to_string()),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, DomainError> {
        let result = webinars::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<webinars::Model> for Webinar {
    fn from(model: webinars::Model) -> Self {
        Webinar {
            id: WebinarId(model.id),
            organizer_id: UserId(model.organizer_id),
            title: model.title,
            start_date: model.start_date.with_timezone(&Utc),
            end_date: model.end_date.with_timezone(&Utc),
            seats: model.seats,
        }
    }
}
