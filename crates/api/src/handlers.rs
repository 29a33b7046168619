/// Slot queries and availability window management
pub mod availability;
/// Appointment booking, cancellation and status management
pub mod appointment;
/// Customer registration from the booking form
pub mod customer;
/// Service catalogue
pub mod service;
