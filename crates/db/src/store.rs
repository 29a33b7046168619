//! The storage object handed to the HTTP layer.
//!
//! [`BookingStore`] is the seam between request handling and PostgreSQL:
//! handlers only ever see the trait, the server wires in [`PgBookingStore`],
//! and tests wire in [`crate::mock::MockStore`].

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use osteo_core::models::{
    appointment::{Appointment, AppointmentFilter, AppointmentStatus, NewAppointment},
    availability::{AvailabilityWindow, NewAvailabilityWindow},
    customer::{Customer, UpsertCustomerRequest},
    service::{CreateServiceRequest, Service},
};
use uuid::Uuid;

use crate::{
    repositories::{appointment, appointment::StatusUpdate, availability, customer, service},
    DbPool,
};

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Round-trips to the database, for readiness probes.
    async fn ping(&self) -> Result<()>;

    /// Windows of `date` that are open for booking.
    async fn active_windows_for_date(&self, date: NaiveDate) -> Result<Vec<AvailabilityWindow>>;

    /// Start times of the non-cancelled appointments of `date`.
    async fn booked_times_for_date(&self, date: NaiveDate) -> Result<Vec<NaiveTime>>;

    async fn list_windows(&self, from: NaiveDate) -> Result<Vec<AvailabilityWindow>>;

    async fn create_window(&self, window: NewAvailabilityWindow) -> Result<AvailabilityWindow>;

    async fn set_window_availability(
        &self,
        id: Uuid,
        is_available: bool,
    ) -> Result<Option<AvailabilityWindow>>;

    async fn list_services(&self, include_inactive: bool) -> Result<Vec<Service>>;

    async fn get_service(&self, id: Uuid) -> Result<Option<Service>>;

    async fn create_service(&self, service: CreateServiceRequest) -> Result<Service>;

    async fn upsert_customer(&self, customer: UpsertCustomerRequest) -> Result<Customer>;

    async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>>;

    /// `None` when another live appointment already starts at the same time.
    async fn create_appointment(&self, appointment: NewAppointment) -> Result<Option<Appointment>>;

    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>>;

    async fn list_appointments(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>>;

    async fn update_appointment_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<StatusUpdate<Appointment>>;
}

/// [`BookingStore`] backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn active_windows_for_date(&self, date: NaiveDate) -> Result<Vec<AvailabilityWindow>> {
        availability::get_active_availability_by_date(&self.pool, date)
            .await?
            .into_iter()
            .map(AvailabilityWindow::try_from)
            .collect()
    }

    async fn booked_times_for_date(&self, date: NaiveDate) -> Result<Vec<NaiveTime>> {
        let booked = appointment::get_booked_times_by_date(&self.pool, date).await?;
        Ok(booked.into_iter().map(|at| at.time()).collect())
    }

    async fn list_windows(&self, from: NaiveDate) -> Result<Vec<AvailabilityWindow>> {
        availability::get_availability_from(&self.pool, from)
            .await?
            .into_iter()
            .map(AvailabilityWindow::try_from)
            .collect()
    }

    async fn create_window(&self, window: NewAvailabilityWindow) -> Result<AvailabilityWindow> {
        let row = availability::create_availability(
            &self.pool,
            window.date,
            window.start,
            window.end,
            window.is_available,
        )
        .await?;
        AvailabilityWindow::try_from(row)
    }

    async fn set_window_availability(
        &self,
        id: Uuid,
        is_available: bool,
    ) -> Result<Option<AvailabilityWindow>> {
        availability::set_availability_flag(&self.pool, id, is_available)
            .await?
            .map(AvailabilityWindow::try_from)
            .transpose()
    }

    async fn list_services(&self, include_inactive: bool) -> Result<Vec<Service>> {
        let rows = service::get_services(&self.pool, include_inactive).await?;
        Ok(rows.into_iter().map(Service::from).collect())
    }

    async fn get_service(&self, id: Uuid) -> Result<Option<Service>> {
        let row = service::get_service_by_id(&self.pool, id).await?;
        Ok(row.map(Service::from))
    }

    async fn create_service(&self, new_service: CreateServiceRequest) -> Result<Service> {
        let row = service::create_service(&self.pool, &new_service).await?;
        Ok(Service::from(row))
    }

    async fn upsert_customer(&self, new_customer: UpsertCustomerRequest) -> Result<Customer> {
        let row = customer::upsert_customer(&self.pool, &new_customer).await?;
        Customer::try_from(row)
    }

    async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>> {
        customer::get_customer_by_id(&self.pool, id)
            .await?
            .map(Customer::try_from)
            .transpose()
    }

    async fn create_appointment(
        &self,
        new_appointment: NewAppointment,
    ) -> Result<Option<Appointment>> {
        appointment::create_appointment(&self.pool, &new_appointment)
            .await?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
        appointment::get_appointment_by_id(&self.pool, id)
            .await?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn list_appointments(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>> {
        appointment::get_appointments(&self.pool, &filter)
            .await?
            .into_iter()
            .map(Appointment::try_from)
            .collect()
    }

    async fn update_appointment_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<StatusUpdate<Appointment>> {
        match appointment::update_appointment_status(&self.pool, id, status).await? {
            StatusUpdate::Updated(row) => Ok(StatusUpdate::Updated(Appointment::try_from(row)?)),
            StatusUpdate::NotFound => Ok(StatusUpdate::NotFound),
            StatusUpdate::SlotTaken => Ok(StatusUpdate::SlotTaken),
        }
    }
}
