//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.
//!
//! Storage failures are logged in full and answered with a generic message;
//! the caller only learns that the data could not be retrieved, which is
//! distinct from an empty result.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use osteo_core::errors::BookingError;
use serde_json::json;

pub const RETRIEVAL_FAILURE_MESSAGE: &str = "Failed to retrieve data from storage";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use osteo_api::middleware::error_handling::AppError;
/// use osteo_core::errors::BookingError;
///
/// async fn handler(date: Option<String>) -> Result<Json<String>, AppError> {
///     let date = date.ok_or_else(|| {
///         AppError(BookingError::Validation("Date parameter is required".to_string()))
///     })?;
///     Ok(Json(date))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            BookingError::Retrieval(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self.0 {
            BookingError::Retrieval(report) => {
                tracing::error!("Storage retrieval failed: {:?}", report);
                RETRIEVAL_FAILURE_MESSAGE.to_string()
            }
            BookingError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                self.0.to_string()
            }
            other => {
                tracing::debug!("Request rejected with {}: {}", status, other);
                other.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Lets handlers use `?` on functions returning `BookingResult<T>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Lets handlers use `?` on storage calls; any storage failure is a retrieval error.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Retrieval(err))
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
