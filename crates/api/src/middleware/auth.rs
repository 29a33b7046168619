//! # Admin Guard
//!
//! The admin panel endpoints are protected by a single shared bearer token
//! (`ADMIN_TOKEN`). Customer-facing endpoints are public.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use osteo_core::errors::BookingError;

use crate::{ApiState, middleware::error_handling::AppError};

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Compares two tokens in time that depends only on their lengths.
pub fn tokens_match(provided: &str, expected: &str) -> bool {
    let (provided, expected) = (provided.as_bytes(), expected.as_bytes());
    if provided.len() != expected.len() {
        return false;
    }
    provided
        .iter()
        .zip(expected)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

/// Rejects the request unless it carries the configured admin token.
pub async fn require_admin(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.settings.admin_token.as_deref() else {
        tracing::warn!("Admin request refused: ADMIN_TOKEN is not configured");
        return Err(AppError(BookingError::Unauthorized(
            "Admin access is not configured".to_string(),
        )));
    };

    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token);

    match provided {
        Some(token) if tokens_match(token, expected) => Ok(next.run(request).await),
        Some(_) => Err(AppError(BookingError::Unauthorized(
            "Invalid admin token".to_string(),
        ))),
        None => Err(AppError(BookingError::Unauthorized(
            "Missing bearer token".to_string(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Bearer abc", Some("abc"))]
    #[case("bearer abc ", Some("abc"))]
    #[case("Basic abc", None)]
    #[case("Bearer ", None)]
    #[case("abc", None)]
    fn test_bearer_token(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(bearer_token(header), expected);
    }

    #[rstest]
    #[case("s3cret", "s3cret", true)]
    #[case("s3creT", "s3cret", false)]
    #[case("s3cre", "s3cret", false)]
    #[case("s3cret-and-more", "s3cret", false)]
    #[case("", "s3cret", false)]
    fn test_tokens_match(#[case] provided: &str, #[case] expected: &str, #[case] matches: bool) {
        assert_eq!(tokens_match(provided, expected), matches);
    }
}
