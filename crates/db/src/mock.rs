use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use osteo_core::models::{
    appointment::{Appointment, AppointmentFilter, AppointmentStatus, NewAppointment},
    availability::{AvailabilityWindow, NewAvailabilityWindow},
    customer::{Customer, UpsertCustomerRequest},
    service::{CreateServiceRequest, Service},
};
use uuid::Uuid;

use crate::{repositories::appointment::StatusUpdate, store::BookingStore};

// Mock store for handler tests
mock! {
    pub Store {}

    #[async_trait]
    impl BookingStore for Store {
        async fn ping(&self) -> eyre::Result<()>;

        async fn active_windows_for_date(
            &self,
            date: NaiveDate,
        ) -> eyre::Result<Vec<AvailabilityWindow>>;

        async fn booked_times_for_date(&self, date: NaiveDate) -> eyre::Result<Vec<NaiveTime>>;

        async fn list_windows(&self, from: NaiveDate) -> eyre::Result<Vec<AvailabilityWindow>>;

        async fn create_window(
            &self,
            window: NewAvailabilityWindow,
        ) -> eyre::Result<AvailabilityWindow>;

        async fn set_window_availability(
            &self,
            id: Uuid,
            is_available: bool,
        ) -> eyre::Result<Option<AvailabilityWindow>>;

        async fn list_services(&self, include_inactive: bool) -> eyre::Result<Vec<Service>>;

        async fn get_service(&self, id: Uuid) -> eyre::Result<Option<Service>>;

        async fn create_service(&self, service: CreateServiceRequest) -> eyre::Result<Service>;

        async fn upsert_customer(&self, customer: UpsertCustomerRequest) -> eyre::Result<Customer>;

        async fn get_customer(&self, id: Uuid) -> eyre::Result<Option<Customer>>;

        async fn create_appointment(
            &self,
            appointment: NewAppointment,
        ) -> eyre::Result<Option<Appointment>>;

        async fn get_appointment(&self, id: Uuid) -> eyre::Result<Option<Appointment>>;

        async fn list_appointments(
            &self,
            filter: AppointmentFilter,
        ) -> eyre::Result<Vec<Appointment>>;

        async fn update_appointment_status(
            &self,
            id: Uuid,
            status: AppointmentStatus,
        ) -> eyre::Result<StatusUpdate<Appointment>>;
    }
}
