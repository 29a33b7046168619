/// Admin panel endpoints, behind the admin guard
pub mod admin;
/// Public slot query
pub mod availability;
/// Booking flow and customer dashboard endpoints
pub mod booking;
/// Liveness and version endpoints
pub mod health;
