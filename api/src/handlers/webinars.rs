//! Webinar handlers
//!
//! Endpoints for organizing webinars and changing their seat count.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::{ChangeSeatsCommand, OrganizeWebinarCommand};
use crate::domain::entities::{User, WebinarId};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Request body for creating a webinar
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebinarRequest {
    pub title: String,
    pub seats: i32,
    /// ISO-8601 date string
    pub start_date: String,
    /// ISO-8601 date string
    pub end_date: String,
}

/// Response body for creating a webinar
#[derive(Debug, Serialize)]
pub struct CreateWebinarResponse {
    pub id: String,
}

/// Request body for changing the seat count.
/// Seats arrive as a string and are parsed to an integer.
#[derive(Debug, Deserialize)]
pub struct ChangeSeatsRequest {
    pub seats: String,
}

/// Fixed confirmation body for a successful seat change
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn parse_date(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::BadRequest(format!("{} must be an ISO-8601 date", field)))
}

/// POST /webinars
///
/// Organize a new webinar owned by the authenticated user.
pub async fn create_webinar(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateWebinarRequest>,
) -> Result<(StatusCode, Json<CreateWebinarResponse>), AppError> {
    let start_date = parse_date("startDate", &request.start_date)?;
    let end_date = parse_date("endDate", &request.end_date)?;

    let result = state
        .organize_webinar
        .execute(OrganizeWebinarCommand {
            user_id: user.id,
            title: request.title,
            seats: request.seats,
            start_date,
            end_date,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateWebinarResponse {
            id: result.id.to_string(),
        }),
    ))
}

/// POST /webinars/:id/seats
///
/// Change the seat count of a webinar. Only not-found and not-organizer
/// translate to dedicated statuses here; seat-bound and reduction
/// violations surface as opaque 500s on this route, matching the original
/// wiring this service replaces.
pub async fn change_seats(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(user): Extension<User>,
    Json(request): Json<ChangeSeatsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let seats: i32 = request
        .seats
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("seats must be an integer".to_string()))?;

    state
        .change_seats
        .execute(ChangeSeatsCommand {
            user,
            webinar_id: WebinarId::new(id),
            seats,
        })
        .await
        .map_err(|err| match err {
            e @ AppError::Domain(DomainError::WebinarNotFound | DomainError::NotOrganizer) => e,
            other => AppError::Internal(other.to_string()),
        })?;

    Ok(Json(MessageResponse {
        message: "Seats updated".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_rfc3339() {
        let parsed = parse_date("startDate", "2024-12-31T10:00:00.000Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-12-31T10:00:00+00:00");
    }

    #[test]
    fn parse_date_rejects_garbage() {
        let err = parse_date("startDate", "not-a-date").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
