use axum::{
    Json,
    extract::{Path, State},
};
use osteo_core::{
    errors::BookingError,
    models::{
        appointment::{Appointment, AppointmentFilter},
        customer::{Customer, UpsertCustomerRequest},
    },
    validation::validate_customer,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Registers the customer from the booking form, updating their details if
/// the email is already known.
#[axum::debug_handler]
pub async fn upsert_customer(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<UpsertCustomerRequest>,
) -> Result<Json<Customer>, AppError> {
    let customer = validate_customer(&payload)?;

    let customer = state.store.upsert_customer(customer).await?;
    tracing::debug!("Customer {} saved", customer.id);

    Ok(Json(customer))
}

/// The customer dashboard: every appointment of one customer, oldest first.
#[axum::debug_handler]
pub async fn list_customer_appointments(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    state
        .store
        .get_customer(id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Customer with ID {} not found", id)))?;

    let appointments = state
        .store
        .list_appointments(AppointmentFilter {
            customer_id: Some(id),
            status: None,
        })
        .await?;

    Ok(Json(appointments))
}
