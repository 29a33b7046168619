use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/services", get(handlers::service::list_services))
        .route("/api/customers", post(handlers::customer::upsert_customer))
        .route(
            "/api/customers/:id/appointments",
            get(handlers::customer::list_customer_appointments),
        )
        .route(
            "/api/appointments",
            post(handlers::appointment::create_appointment),
        )
        .route(
            "/api/appointments/:id/cancel",
            post(handlers::appointment::cancel_appointment),
        )
}
