//! # Slot Calculator
//!
//! Turns the availability windows of one day and the start times already
//! booked on that day into the ordered list of bookable start times.
//!
//! ## Algorithm
//!
//! 1. Convert each window's start and end to minutes since midnight
//! 2. Walk `start, start + width, start + 2 * width, ...` while the candidate
//!    starts strictly before the window's end
//! 3. Drop candidates whose minute exactly matches a booked start time
//! 4. Merge every window's candidates, deduplicate and sort ascending
//!
//! Conflicts are exact-minute matches only: an appointment blocks the slot it
//! starts on, not the slots its duration may overlap.

use std::collections::{BTreeSet, HashSet};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::availability::AvailabilityWindow;

pub const DEFAULT_SLOT_WIDTH_MINUTES: u32 = 30;

/// Widest slot that still fits in a day.
pub const MAX_SLOT_WIDTH_MINUTES: u32 = 24 * 60;

/// Minutes elapsed since midnight, ignoring seconds.
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn time_from_minutes(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Renders a slot the way the booking UI expects it, e.g. `09:30`.
pub fn format_slot(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Computes the bookable slot starts of `date`.
///
/// Windows that belong to another day or are marked unavailable are ignored.
/// A `slot_width_minutes` of zero yields no slots; a width of a day or more
/// yields at most each window's start.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use osteo_core::models::availability::AvailabilityWindow;
/// use osteo_core::slots::{compute_available_slots, format_slot};
/// use uuid::Uuid;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let window = AvailabilityWindow::new(
///     Uuid::new_v4(),
///     date,
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     true,
/// )
/// .unwrap();
///
/// let slots = compute_available_slots(date, &[window], &[], 30);
/// let slots: Vec<String> = slots.into_iter().map(format_slot).collect();
/// assert_eq!(slots, vec!["09:00", "09:30"]);
/// ```
pub fn compute_available_slots(
    date: NaiveDate,
    windows: &[AvailabilityWindow],
    booked_times: &[NaiveTime],
    slot_width_minutes: u32,
) -> Vec<NaiveTime> {
    if slot_width_minutes == 0 {
        return Vec::new();
    }

    let booked: HashSet<u32> = booked_times
        .iter()
        .copied()
        .map(minutes_since_midnight)
        .collect();

    let mut slots = BTreeSet::new();
    for window in windows
        .iter()
        .filter(|window| window.date == date && window.is_available)
    {
        let end = minutes_since_midnight(window.end);
        let mut candidate = minutes_since_midnight(window.start);

        while candidate < end {
            if !booked.contains(&candidate) {
                slots.insert(candidate);
            }
            match candidate.checked_add(slot_width_minutes) {
                Some(next) => candidate = next,
                None => break,
            }
        }
    }

    slots.into_iter().filter_map(time_from_minutes).collect()
}

/// Removes the slots of `date` that start before `cutoff`.
pub fn drop_slots_before(
    date: NaiveDate,
    slots: Vec<NaiveTime>,
    cutoff: NaiveDateTime,
) -> Vec<NaiveTime> {
    slots
        .into_iter()
        .filter(|slot| date.and_time(*slot) >= cutoff)
        .collect()
}
