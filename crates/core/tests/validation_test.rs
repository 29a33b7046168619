use chrono::{NaiveDate, NaiveTime};
use osteo_core::{
    errors::BookingError,
    models::{
        appointment::CreateAppointmentRequest,
        availability::CreateAvailabilityRequest,
        customer::{Language, UpsertCustomerRequest},
        service::CreateServiceRequest,
    },
    validation::{
        validate_appointment, validate_availability, validate_customer, validate_service,
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

fn service_request() -> CreateServiceRequest {
    CreateServiceRequest {
        name_fr: "Ostéopathie".to_string(),
        name_pt: "Osteopatia".to_string(),
        name_en: "Osteopathy".to_string(),
        description_fr: "Séance d'ostéopathie structurelle".to_string(),
        description_pt: "Sessão de osteopatia estrutural".to_string(),
        description_en: "Structural osteopathy session".to_string(),
        price_cents: 6000,
        duration_minutes: 45,
        is_active: true,
    }
}

#[test]
fn test_valid_availability_request() {
    let request = CreateAvailabilityRequest {
        date: "2025-06-02".to_string(),
        start_time: "09:00".to_string(),
        end_time: "12:00".to_string(),
        is_available: true,
    };

    let window = validate_availability(&request).unwrap();
    assert_eq!(window.date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    assert_eq!(window.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    assert_eq!(window.end, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
}

#[rstest]
#[case("2025-06-02", "12:00", "09:00")]
#[case("2025-06-02", "09:00", "09:00")]
#[case("02/06/2025", "09:00", "12:00")]
#[case("2025-06-02", "9h", "12:00")]
fn test_invalid_availability_request(
    #[case] date: &str,
    #[case] start: &str,
    #[case] end: &str,
) {
    let request = CreateAvailabilityRequest {
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        is_available: true,
    };

    assert!(matches!(
        validate_availability(&request),
        Err(BookingError::Validation(_))
    ));
}

#[test]
fn test_valid_service_request() {
    assert!(validate_service(&service_request()).is_ok());
}

#[rstest]
#[case::short_name(CreateServiceRequest { name_pt: "Os".to_string(), ..service_request() })]
#[case::short_description(CreateServiceRequest { description_en: "Short".to_string(), ..service_request() })]
#[case::negative_price(CreateServiceRequest { price_cents: -1, ..service_request() })]
#[case::too_short(CreateServiceRequest { duration_minutes: 10, ..service_request() })]
fn test_invalid_service_request(#[case] request: CreateServiceRequest) {
    assert!(matches!(
        validate_service(&request),
        Err(BookingError::Validation(_))
    ));
}

#[test]
fn test_customer_is_normalized() {
    let request = UpsertCustomerRequest {
        email: "  Marie.Dupont@Example.COM ".to_string(),
        first_name: " Marie ".to_string(),
        last_name: "Dupont".to_string(),
        phone: "+33 6 12 34 56 78".to_string(),
        preferred_language: Language::En,
    };

    let customer = validate_customer(&request).unwrap();
    assert_eq!(customer.email, "marie.dupont@example.com");
    assert_eq!(customer.first_name, "Marie");
    assert_eq!(customer.phone, "+33612345678");
    assert_eq!(customer.preferred_language, Language::En);
}

#[rstest]
#[case("not-an-email", "Marie", "Dupont")]
#[case("marie@example.com", "M", "Dupont")]
#[case("marie@example.com", "Marie", " D ")]
fn test_invalid_customer(#[case] email: &str, #[case] first: &str, #[case] last: &str) {
    let request = UpsertCustomerRequest {
        email: email.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone: "+33612345678".to_string(),
        preferred_language: Language::Fr,
    };

    assert!(validate_customer(&request).is_err());
}

#[test]
fn test_appointment_combines_date_and_time() {
    let request = CreateAppointmentRequest {
        customer_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        date: "2025-06-02".to_string(),
        time: "10:30".to_string(),
        notes: Some("   ".to_string()),
    };

    let appointment = validate_appointment(&request).unwrap();
    assert_eq!(
        appointment.appointment_date,
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    );
    assert_eq!(appointment.notes, None);
}

#[test]
fn test_appointment_notes_length_limit() {
    let request = CreateAppointmentRequest {
        customer_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        date: "2025-06-02".to_string(),
        time: "10:30".to_string(),
        notes: Some("x".repeat(501)),
    };

    assert!(matches!(
        validate_appointment(&request),
        Err(BookingError::Validation(_))
    ));
}
