use axum::{Json, extract::State, http::StatusCode};
use osteo_core::{
    models::service::{CreateServiceRequest, Service},
    validation::validate_service,
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Services a customer can book.
#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = state.store.list_services(false).await?;
    Ok(Json(services))
}

/// Every service, including retired ones, for the admin panel.
#[axum::debug_handler]
pub async fn list_all_services(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = state.store.list_services(true).await?;
    Ok(Json(services))
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    validate_service(&payload)?;

    let service = state.store.create_service(payload).await?;
    tracing::info!("Created service {} ({})", service.id, service.name_en);

    Ok((StatusCode::CREATED, Json(service)))
}
