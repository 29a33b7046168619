//! Input validation for the booking forms and admin panel.
//!
//! Each `validate_*` function turns a loosely typed request into the typed
//! input the storage layer accepts, or fails with [`BookingError::Validation`].

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::{
    errors::{BookingError, BookingResult},
    models::{
        appointment::{CreateAppointmentRequest, NewAppointment},
        availability::{CreateAvailabilityRequest, NewAvailabilityWindow},
        customer::UpsertCustomerRequest,
        service::CreateServiceRequest,
    },
};

pub const MAX_NOTES_LEN: usize = 500;
pub const MIN_SERVICE_DURATION_MINUTES: i32 = 15;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid time regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("valid phone regex"));

/// Parses a `YYYY-MM-DD` calendar day.
pub fn parse_date(raw: &str) -> BookingResult<NaiveDate> {
    let raw = raw.trim();
    if !DATE_RE.is_match(raw) {
        return Err(BookingError::Validation(format!(
            "Invalid date format: '{}', expected YYYY-MM-DD",
            raw
        )));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| BookingError::Validation(format!("Invalid date '{}': {}", raw, e)))
}

/// Parses an `HH:MM` time of day.
pub fn parse_time(raw: &str) -> BookingResult<NaiveTime> {
    let raw = raw.trim();
    if !TIME_RE.is_match(raw) {
        return Err(BookingError::Validation(format!(
            "Invalid time format: '{}', expected HH:MM",
            raw
        )));
    }

    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|e| BookingError::Validation(format!("Invalid time '{}': {}", raw, e)))
}

pub fn validate_availability(
    request: &CreateAvailabilityRequest,
) -> BookingResult<NewAvailabilityWindow> {
    let date = parse_date(&request.date)?;
    let start = parse_time(&request.start_time)?;
    let end = parse_time(&request.end_time)?;

    if start >= end {
        return Err(BookingError::Validation(
            "End time must be after start time".to_string(),
        ));
    }

    Ok(NewAvailabilityWindow {
        date,
        start,
        end,
        is_available: request.is_available,
    })
}

pub fn validate_service(request: &CreateServiceRequest) -> BookingResult<()> {
    let names = [
        ("nameFr", &request.name_fr),
        ("namePt", &request.name_pt),
        ("nameEn", &request.name_en),
    ];
    for (field, value) in names {
        require_min_chars(field, value, 3)?;
    }

    let descriptions = [
        ("descriptionFr", &request.description_fr),
        ("descriptionPt", &request.description_pt),
        ("descriptionEn", &request.description_en),
    ];
    for (field, value) in descriptions {
        require_min_chars(field, value, 10)?;
    }

    if request.price_cents < 0 {
        return Err(BookingError::Validation(
            "Price cannot be negative".to_string(),
        ));
    }

    if request.duration_minutes < MIN_SERVICE_DURATION_MINUTES {
        return Err(BookingError::Validation(format!(
            "Duration must be at least {} minutes",
            MIN_SERVICE_DURATION_MINUTES
        )));
    }

    Ok(())
}

/// Normalizes the customer form: trims every field and lowercases the email.
pub fn validate_customer(request: &UpsertCustomerRequest) -> BookingResult<UpsertCustomerRequest> {
    let email = request.email.trim().to_lowercase();
    if !EMAIL_RE.is_match(&email) {
        return Err(BookingError::Validation(format!("Invalid email: {}", email)));
    }

    let first_name = request.first_name.trim().to_string();
    let last_name = request.last_name.trim().to_string();
    require_min_chars("firstName", &first_name, 2)?;
    require_min_chars("lastName", &last_name, 2)?;

    let phone: String = request.phone.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_RE.is_match(&phone) {
        return Err(BookingError::Validation(format!(
            "Invalid phone number: {}",
            request.phone
        )));
    }

    Ok(UpsertCustomerRequest {
        email,
        first_name,
        last_name,
        phone,
        preferred_language: request.preferred_language,
    })
}

pub fn validate_appointment(request: &CreateAppointmentRequest) -> BookingResult<NewAppointment> {
    let date = parse_date(&request.date)?;
    let time = parse_time(&request.time)?;

    let notes = request
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
        .map(str::to_string);

    if let Some(notes) = &notes {
        if notes.chars().count() > MAX_NOTES_LEN {
            return Err(BookingError::Validation(format!(
                "Notes cannot exceed {} characters",
                MAX_NOTES_LEN
            )));
        }
    }

    Ok(NewAppointment {
        customer_id: request.customer_id,
        service_id: request.service_id,
        appointment_date: date.and_time(time),
        notes,
    })
}

fn require_min_chars(field: &str, value: &str, min: usize) -> BookingResult<()> {
    if value.trim().chars().count() < min {
        return Err(BookingError::Validation(format!(
            "{} must contain at least {} characters",
            field, min
        )));
    }
    Ok(())
}
