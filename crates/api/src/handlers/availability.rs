//! # Availability Handlers
//!
//! The public slot query used by the booking calendar, and the admin
//! endpoints that open, close and list availability windows.
//!
//! A slot query reads the day's active windows and booked start times from
//! the store, then hands both to the slot calculator. When the store fails the
//! request fails with a retrieval error rather than an empty slot list, so the
//! calendar can tell "fully booked" apart from "unknown".

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{Duration, Local, NaiveDate, NaiveTime};
use osteo_core::{
    errors::BookingError,
    models::availability::{
        AvailabilityResponse, AvailabilityWindow, CreateAvailabilityRequest,
        UpdateAvailabilityRequest,
    },
    slots::{compute_available_slots, drop_slots_before, format_slot},
    validation::{parse_date, validate_availability},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the slot query
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Day to query, `YYYY-MM-DD`
    pub date: Option<String>,
}

/// Query parameters for the admin window listing
#[derive(Debug, Deserialize)]
pub struct WindowListQuery {
    /// First day to list, `YYYY-MM-DD` (default: today)
    pub from: Option<String>,
}

/// Bookable slots of `date` as currently known by the store.
///
/// Both reads run concurrently; either failing fails the whole query.
pub async fn available_slots(state: &ApiState, date: NaiveDate) -> Result<Vec<NaiveTime>, AppError> {
    let (windows, booked) = tokio::try_join!(
        state.store.active_windows_for_date(date),
        state.store.booked_times_for_date(date)
    )?;

    let slots = compute_available_slots(
        date,
        &windows,
        &booked,
        state.settings.slot_width_minutes,
    );

    let slots = match state.settings.lead_minutes {
        Some(lead) => {
            let cutoff = Local::now().naive_local() + Duration::minutes(i64::from(lead));
            drop_slots_before(date, slots, cutoff)
        }
        None => slots,
    };

    debug!(
        "{} windows, {} bookings on {} -> {} slots",
        windows.len(),
        booked.len(),
        date,
        slots.len()
    );

    Ok(slots)
}

/// Lists the bookable slots of one day
///
/// # Endpoint
///
/// ```text
/// GET /api/availability?date=2025-06-02
/// ```
///
/// # Errors
///
/// * `BookingError::Validation` - `date` missing or not `YYYY-MM-DD`
/// * `BookingError::Retrieval` - the store could not be read
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let raw_date = query
        .date
        .as_deref()
        .map(str::trim)
        .filter(|date| !date.is_empty())
        .ok_or_else(|| BookingError::Validation("Date parameter is required".to_string()))?;
    let date = parse_date(raw_date)?;

    let slots = available_slots(&state, date).await?;

    Ok(Json(AvailabilityResponse {
        available_slots: slots.into_iter().map(format_slot).collect(),
    }))
}

#[axum::debug_handler]
pub async fn list_windows(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<WindowListQuery>,
) -> Result<Json<Vec<AvailabilityWindow>>, AppError> {
    let from = match query.from.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let windows = state.store.list_windows(from).await?;
    Ok(Json(windows))
}

#[axum::debug_handler]
pub async fn create_window(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAvailabilityRequest>,
) -> Result<(StatusCode, Json<AvailabilityWindow>), AppError> {
    let new_window = validate_availability(&payload)?;

    let window = state.store.create_window(new_window).await?;
    info!(
        "Opened availability window {} on {} from {} to {}",
        window.id,
        window.date,
        format_slot(window.start),
        format_slot(window.end)
    );

    Ok((StatusCode::CREATED, Json(window)))
}

#[axum::debug_handler]
pub async fn update_window(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAvailabilityRequest>,
) -> Result<Json<AvailabilityWindow>, AppError> {
    let window = state
        .store
        .set_window_availability(id, payload.is_available)
        .await?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Availability window with ID {} not found", id))
        })?;

    info!(
        "Availability window {} is now {}",
        id,
        if window.is_available { "open" } else { "closed" }
    );

    Ok(Json(window))
}
