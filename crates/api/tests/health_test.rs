mod common;

use axum::http::StatusCode;
use osteo_db::mock::MockStore;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use common::server;

#[tokio::test]
async fn test_liveness_does_not_touch_the_store() {
    let mut store = MockStore::new();
    store.expect_ping().never();

    let response = server(store).get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_ready_when_store_answers() {
    let mut store = MockStore::new();
    store.expect_ping().times(1).returning(|| Ok(()));

    let response = server(store).get("/health/ready").await;

    response.assert_status_ok();
}

#[test_log::test(tokio::test)]
async fn test_not_ready_when_store_is_down() {
    let mut store = MockStore::new();
    store
        .expect_ping()
        .returning(|| Err(eyre::eyre!("pool timed out")));

    let response = server(store).get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_version_reports_package() {
    let response = server(MockStore::new()).get("/version").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "osteo-api");
}
