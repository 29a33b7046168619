//! # Osteo API
//!
//! The web server of the clinic booking service. It exposes the slot query
//! used by the booking calendar, the booking flow and customer dashboard
//! endpoints, and the admin panel endpoints.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Admin guard and error mapping
//! - **Config**: Environment-driven application configuration
//!
//! Handlers never touch the database directly: they go through the
//! [`BookingStore`] held in [`ApiState`], which the server builds from a
//! PostgreSQL pool and tests replace with a mock.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for the admin guard and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, StatusCode},
};
use eyre::Result;
use osteo_db::{BookingStore, DbPool, PgBookingStore};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::config::BookingSettings;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Storage collaborator for availability, services, customers and appointments
    pub store: Arc<dyn BookingStore>,
    /// Slot width, lead time and admin token
    pub settings: BookingSettings,
}

impl ApiState {
    pub fn new(store: Arc<dyn BookingStore>, settings: BookingSettings) -> Self {
        Self { store, settings }
    }
}

/// Builds the application router with every route attached to `state`
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot query for the booking calendar
        .merge(routes::availability::routes())
        // Booking flow and customer dashboard
        .merge(routes::booking::routes())
        // Admin panel, behind the admin guard
        .merge(routes::admin::routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// # Example
///
/// ```rust,ignore
/// let config = ApiConfig::from_env()?;
/// let db_pool = osteo_db::create_pool(&config.database_url).await?;
/// start_server(config, db_pool).await?;
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if config.booking.admin_token.is_none() {
        warn!("ADMIN_TOKEN is not set, admin endpoints will refuse every request");
    }

    let store: Arc<dyn BookingStore> = Arc::new(PgBookingStore::new(db_pool));
    let state = Arc::new(ApiState::new(store, config.booking.clone()));

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|err: BoxError| async move {
                warn!("Request failed in middleware: {}", err);
                StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
