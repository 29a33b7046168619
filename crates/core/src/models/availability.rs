use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

/// A contiguous time-of-day range on one day during which bookings are allowed.
///
/// Construct through [`AvailabilityWindow::new`] so that `start < end` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end: NaiveTime,
    pub is_available: bool,
}

impl AvailabilityWindow {
    pub fn new(
        id: Uuid,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        is_available: bool,
    ) -> BookingResult<Self> {
        if start >= end {
            return Err(BookingError::Validation(format!(
                "Availability window on {} must end after it starts ({} >= {})",
                date,
                start.format("%H:%M"),
                end.format("%H:%M"),
            )));
        }

        Ok(Self {
            id,
            date,
            start,
            end,
            is_available,
        })
    }
}

/// Validated input for a new availability window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAvailabilityWindow {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available_slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvailabilityRequest {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub is_available: bool,
}

/// Serializes a time of day as `HH:MM`.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}
