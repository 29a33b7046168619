//! # Osteo Core
//!
//! Domain types, errors and validation for the clinic booking service, plus
//! the slot calculator that turns availability windows and existing bookings
//! into the bookable start times of a day.
//!
//! Nothing in this crate performs I/O.

pub mod errors;
pub mod models;
pub mod slots;
pub mod validation;
