pub mod appointment;
pub mod availability;
pub mod customer;
pub mod service;
