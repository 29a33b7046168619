#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderValue};
use axum_test::{TestRequest, TestServer};
use chrono::{NaiveDate, NaiveTime, Utc};
use osteo_api::{build_router, config::BookingSettings, ApiState};
use osteo_core::models::{
    appointment::{Appointment, AppointmentStatus, PaymentStatus},
    availability::AvailabilityWindow,
    customer::{Customer, Language},
    service::Service,
};
use osteo_db::mock::MockStore;
use uuid::Uuid;

pub const ADMIN_TOKEN: &str = "test-admin-token";

pub fn settings() -> BookingSettings {
    BookingSettings {
        admin_token: Some(ADMIN_TOKEN.to_string()),
        ..BookingSettings::default()
    }
}

pub fn server_with(store: MockStore, settings: BookingSettings) -> TestServer {
    let state = Arc::new(ApiState::new(Arc::new(store), settings));
    TestServer::new(build_router(state)).expect("Failed to start test server")
}

pub fn server(store: MockStore) -> TestServer {
    server_with(store, settings())
}

pub fn as_admin(request: TestRequest) -> TestRequest {
    request.add_header(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", ADMIN_TOKEN)).unwrap(),
    )
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 3).unwrap()
}

pub fn hm(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
}

pub fn window(date: NaiveDate, start: &str, end: &str) -> AvailabilityWindow {
    AvailabilityWindow::new(Uuid::new_v4(), date, hm(start), hm(end), true).unwrap()
}

pub fn service(id: Uuid, is_active: bool) -> Service {
    Service {
        id,
        name_fr: "Consultation ostéopathique".to_string(),
        name_pt: "Consulta de osteopatia".to_string(),
        name_en: "Osteopathy consultation".to_string(),
        description_fr: "Séance complète d'ostéopathie".to_string(),
        description_pt: "Sessão completa de osteopatia".to_string(),
        description_en: "Full osteopathy session".to_string(),
        price_cents: 6000,
        duration_minutes: 45,
        is_active,
    }
}

pub fn customer(id: Uuid) -> Customer {
    Customer {
        id,
        email: "marie.dupont@example.com".to_string(),
        first_name: "Marie".to_string(),
        last_name: "Dupont".to_string(),
        phone: "+33612345678".to_string(),
        preferred_language: Language::Fr,
        created_at: Utc::now(),
    }
}

pub fn appointment(id: Uuid, status: AppointmentStatus) -> Appointment {
    let now = Utc::now();
    Appointment {
        id,
        customer_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        appointment_date: day().and_time(hm("10:00")),
        status,
        notes: None,
        payment_status: PaymentStatus::Pending,
        payment_id: None,
        created_at: now,
        updated_at: now,
    }
}
