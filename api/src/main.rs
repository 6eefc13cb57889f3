//! Webinars API Server
//!
//! A small booking API: organizers create webinars with a seat capacity
//! and a schedule window, and can later raise the seat count. Uses
//! hexagonal (ports & adapters) architecture for clean separation of
//! concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{middleware, routing::get, routing::post, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresWebinarRepository, SystemClock, UuidIdGenerator};
use app::{ChangeSeats, OrganizeWebinar};
use config::Config;
use domain::ports::{Clock, IdGenerator, WebinarRepository};

/// Application state shared across all handlers
///
/// Use cases are held behind trait objects so router-level tests can wire
/// in the in-memory adapters.
#[derive(Clone)]
pub struct AppState {
    pub organize_webinar:
        Arc<OrganizeWebinar<dyn WebinarRepository, dyn IdGenerator, dyn Clock>>,
    pub change_seats: Arc<ChangeSeats<dyn WebinarRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the API router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth context)
        .route("/health", get(health))
        .merge(
            Router::new()
                .route("/webinars", post(handlers::create_webinar))
                .route("/webinars/:id/seats", post(handlers::change_seats))
                .layer(middleware::from_fn(auth::auth_context)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,webinars_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Webinars API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let webinar_repo: Arc<dyn WebinarRepository> =
        Arc::new(PostgresWebinarRepository::new(db));
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Create use cases
    let state = AppState {
        organize_webinar: Arc::new(OrganizeWebinar::new(
            webinar_repo.clone(),
            ids,
            clock,
        )),
        change_seats: Arc::new(ChangeSeats::new(webinar_repo)),
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5, keyed on the
    // peer IP from the socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    let app = build_router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
