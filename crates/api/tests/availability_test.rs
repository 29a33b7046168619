mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use mockall::predicate;
use osteo_api::{config::BookingSettings, middleware::error_handling::RETRIEVAL_FAILURE_MESSAGE};
use osteo_core::models::availability::AvailabilityResponse;
use osteo_db::mock::MockStore;
use pretty_assertions::assert_eq;
use serde_json::Value;

use common::{day, hm, server, server_with, settings, window};

fn store_with(
    windows: Vec<osteo_core::models::availability::AvailabilityWindow>,
    booked: Vec<chrono::NaiveTime>,
) -> MockStore {
    let mut store = MockStore::new();
    store
        .expect_active_windows_for_date()
        .returning(move |_| Ok(windows.clone()));
    store
        .expect_booked_times_for_date()
        .returning(move |_| Ok(booked.clone()));
    store
}

#[test_log::test(tokio::test)]
async fn test_availability_lists_slots_in_order() {
    let mut store = MockStore::new();
    let windows = vec![window(day(), "14:00", "15:00"), window(day(), "09:00", "10:00")];
    store
        .expect_active_windows_for_date()
        .with(predicate::eq(day()))
        .times(1)
        .returning(move |_| Ok(windows.clone()));
    store
        .expect_booked_times_for_date()
        .with(predicate::eq(day()))
        .times(1)
        .returning(|_| Ok(vec![hm("09:30")]));

    let response = server(store)
        .get("/api/availability")
        .add_query_param("date", "2030-06-03")
        .await;

    response.assert_status_ok();
    let body: AvailabilityResponse = response.json();
    assert_eq!(body.available_slots, vec!["09:00", "14:00", "14:30"]);
}

#[tokio::test]
async fn test_availability_response_shape() {
    let store = store_with(vec![window(day(), "09:00", "11:00")], vec![hm("10:00")]);

    let response = server(store)
        .get("/api/availability")
        .add_query_param("date", "2030-06-03")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        serde_json::json!({ "availableSlots": ["09:00", "09:30", "10:30"] })
    );
}

#[tokio::test]
async fn test_closed_day_is_empty_not_an_error() {
    let store = store_with(vec![], vec![]);

    let response = server(store)
        .get("/api/availability")
        .add_query_param("date", "2030-06-03")
        .await;

    response.assert_status_ok();
    let body: AvailabilityResponse = response.json();
    assert!(body.available_slots.is_empty());
}

#[tokio::test]
async fn test_missing_date_is_rejected() {
    let mut store = MockStore::new();
    store.expect_active_windows_for_date().never();
    store.expect_booked_times_for_date().never();

    let response = server(store).get("/api/availability").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Validation error: Date parameter is required");
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let mut store = MockStore::new();
    store.expect_active_windows_for_date().never();
    store.expect_booked_times_for_date().never();

    let response = server(store)
        .get("/api/availability")
        .add_query_param("date", "03/06/2030")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_retrieval_failure_is_distinct_from_no_slots() {
    let mut store = MockStore::new();
    store
        .expect_active_windows_for_date()
        .returning(|_| Err(eyre::eyre!("connection refused")));
    store
        .expect_booked_times_for_date()
        .returning(|_| Ok(vec![]));

    let response = server(store)
        .get("/api/availability")
        .add_query_param("date", "2030-06-03")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], RETRIEVAL_FAILURE_MESSAGE);
    assert!(body.get("availableSlots").is_none());
}

#[tokio::test]
async fn test_configured_slot_width_is_used() {
    let store = store_with(vec![window(day(), "09:00", "10:00")], vec![]);
    let settings = BookingSettings {
        slot_width_minutes: 20,
        ..settings()
    };

    let response = server_with(store, settings)
        .get("/api/availability")
        .add_query_param("date", "2030-06-03")
        .await;

    let body: AvailabilityResponse = response.json();
    assert_eq!(body.available_slots, vec!["09:00", "09:20", "09:40"]);
}

#[tokio::test]
async fn test_lead_time_hides_past_days() {
    let past = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
    let store = store_with(vec![window(past, "09:00", "10:00")], vec![]);
    let settings = BookingSettings {
        lead_minutes: Some(60),
        ..settings()
    };

    let response = server_with(store, settings)
        .get("/api/availability")
        .add_query_param("date", "2020-01-06")
        .await;

    response.assert_status_ok();
    let body: AvailabilityResponse = response.json();
    assert!(body.available_slots.is_empty());
}

#[tokio::test]
async fn test_without_lead_time_past_days_still_offer_slots() {
    let past = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
    let store = store_with(vec![window(past, "09:00", "10:00")], vec![]);

    let response = server(store)
        .get("/api/availability")
        .add_query_param("date", "2020-01-06")
        .await;

    let body: AvailabilityResponse = response.json();
    assert_eq!(body.available_slots, vec!["09:00", "09:30"]);
}

#[tokio::test]
async fn test_lead_time_keeps_future_days() {
    let store = store_with(vec![window(day(), "09:00", "10:00")], vec![]);
    let settings = BookingSettings {
        lead_minutes: Some(24 * 60),
        ..settings()
    };

    let response = server_with(store, settings)
        .get("/api/availability")
        .add_query_param("date", "2030-06-03")
        .await;

    let body: AvailabilityResponse = response.json();
    assert_eq!(body.available_slots, vec!["09:00", "09:30"]);
}
