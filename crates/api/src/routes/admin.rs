use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth, ApiState};

pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/admin/appointments",
            get(handlers::appointment::list_appointments),
        )
        .route(
            "/api/admin/appointments/:id/status",
            put(handlers::appointment::update_appointment_status),
        )
        .route(
            "/api/admin/availability",
            get(handlers::availability::list_windows).post(handlers::availability::create_window),
        )
        .route(
            "/api/admin/availability/:id",
            put(handlers::availability::update_window),
        )
        .route(
            "/api/admin/services",
            get(handlers::service::list_all_services).post(handlers::service::create_service),
        )
        .route_layer(middleware::from_fn_with_state(state, auth::require_admin))
}
