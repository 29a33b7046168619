//! # Appointment Handlers
//!
//! Booking a slot, cancelling from the customer dashboard, and the admin
//! status board.
//!
//! Booking re-checks the chosen slot against the calculator before inserting,
//! but two customers can still pass that check at the same moment. The store
//! settles the race: the second insert reports the slot as taken and the
//! customer gets a `409 Conflict`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use osteo_core::{
    errors::BookingError,
    models::appointment::{
        Appointment, AppointmentFilter, AppointmentListQuery, AppointmentStatus,
        CreateAppointmentRequest, UpdateAppointmentStatusRequest,
    },
    validation::validate_appointment,
};
use osteo_db::StatusUpdate;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{ApiState, handlers::availability::available_slots, middleware::error_handling::AppError};

const SLOT_TAKEN_MESSAGE: &str = "The selected time slot is no longer available";

/// Books a slot for a customer
///
/// # Endpoint
///
/// ```text
/// POST /api/appointments
/// ```
///
/// # Errors
///
/// * `BookingError::Validation` - malformed input or an inactive service
/// * `BookingError::NotFound` - unknown service or customer
/// * `BookingError::Conflict` - the slot is not offered or was just taken
/// * `BookingError::Retrieval` - the store could not be read or written
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let new_appointment = validate_appointment(&payload)?;

    let service = state
        .store
        .get_service(new_appointment.service_id)
        .await?
        .ok_or_else(|| {
            BookingError::NotFound(format!(
                "Service with ID {} not found",
                new_appointment.service_id
            ))
        })?;
    if !service.is_active {
        return Err(AppError(BookingError::Validation(format!(
            "Service {} is not available for booking",
            service.id
        ))));
    }

    state
        .store
        .get_customer(new_appointment.customer_id)
        .await?
        .ok_or_else(|| {
            BookingError::NotFound(format!(
                "Customer with ID {} not found",
                new_appointment.customer_id
            ))
        })?;

    let date = new_appointment.appointment_date.date();
    let time = new_appointment.appointment_date.time();
    if !available_slots(&state, date).await?.contains(&time) {
        return Err(AppError(BookingError::Conflict(SLOT_TAKEN_MESSAGE.to_string())));
    }

    let appointment = state
        .store
        .create_appointment(new_appointment)
        .await?
        .ok_or_else(|| BookingError::Conflict(SLOT_TAKEN_MESSAGE.to_string()))?;

    info!(
        "Booked appointment {} for customer {} at {}",
        appointment.id, appointment.customer_id, appointment.appointment_date
    );

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Cancels a pending or confirmed appointment on behalf of the customer.
#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state
        .store
        .get_appointment(id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;

    if !appointment.status.is_cancellable() {
        return Err(AppError(BookingError::Conflict(format!(
            "Appointment is already {}",
            appointment.status
        ))));
    }

    let cancelled = apply_status(&state, id, AppointmentStatus::Cancelled).await?;
    info!("Appointment {} cancelled by customer", id);

    Ok(Json(cancelled))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state
        .store
        .list_appointments(AppointmentFilter {
            customer_id: None,
            status: query.status,
        })
        .await?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentStatusRequest>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = apply_status(&state, id, payload.status).await?;
    info!("Appointment {} set to {}", id, appointment.status);

    Ok(Json(appointment))
}

async fn apply_status(
    state: &ApiState,
    id: Uuid,
    status: AppointmentStatus,
) -> Result<Appointment, AppError> {
    match state.store.update_appointment_status(id, status).await? {
        StatusUpdate::Updated(appointment) => Ok(appointment),
        StatusUpdate::NotFound => Err(AppError(BookingError::NotFound(format!(
            "Appointment with ID {} not found",
            id
        )))),
        StatusUpdate::SlotTaken => Err(AppError(BookingError::Conflict(format!(
            "Another appointment already holds this slot, cannot set status to {}",
            status
        )))),
    }
}
