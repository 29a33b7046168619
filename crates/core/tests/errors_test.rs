use std::error::Error;
use osteo_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("Service not found".to_string());
    let validation = BookingError::Validation("Invalid date".to_string());
    let conflict = BookingError::Conflict("Slot already taken".to_string());
    let unauthorized = BookingError::Unauthorized("Missing token".to_string());
    let retrieval = BookingError::Retrieval(eyre::eyre!("connection refused"));
    let internal = BookingError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Service not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid date");
    assert_eq!(conflict.to_string(), "Conflict: Slot already taken");
    assert_eq!(unauthorized.to_string(), "Authentication error: Missing token");
    assert!(retrieval.to_string().contains("connection refused"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_internal_error_keeps_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let error = BookingError::Internal(Box::new(io_error));

    assert!(error.source().is_some());
}

#[test]
fn test_eyre_report_converts_to_retrieval() {
    fn fetch() -> BookingResult<()> {
        let rows: eyre::Result<Vec<u32>> = Err(eyre::eyre!("pool timed out"));
        rows?;
        Ok(())
    }

    match fetch() {
        Err(BookingError::Retrieval(report)) => assert!(report.to_string().contains("pool timed out")),
        other => panic!("Expected Retrieval error, got: {:?}", other),
    }
}
