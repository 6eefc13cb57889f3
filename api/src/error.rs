//! Unified error types for the Webinars API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business rule violations
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business rule violations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Webinar not found")]
    WebinarNotFound,

    #[error("User is not allowed to update this webinar")]
    NotOrganizer,

    #[error("Webinar must be scheduled at least 3 days in advance")]
    DatesTooSoon,

    #[error("Webinar must have at least 1 seat")]
    NotEnoughSeats,

    #[error("Webinar must have at most 1000 seats")]
    TooManySeats,

    #[error("You cannot reduce the number of seats")]
    CannotReduceSeats,

    #[error("Webinar already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Domain(DomainError::WebinarNotFound) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Domain(DomainError::NotOrganizer) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::Domain(
                DomainError::DatesTooSoon
                | DomainError::NotEnoughSeats
                | DomainError::TooManySeats
                | DomainError::CannotReduceSeats,
            ) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                tracing::error!("Duplicate webinar id: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred".to_string(),
                )
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error });

        (status, body).into_response()
    }
}
