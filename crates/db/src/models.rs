//! Row types as stored in PostgreSQL.
//!
//! Rows are converted into the core models with `TryFrom`, which is where
//! status strings and window bounds get checked before anything downstream
//! sees them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use eyre::{eyre, Report};
use osteo_core::models::{
    appointment::{Appointment, AppointmentStatus, PaymentStatus},
    availability::AvailabilityWindow,
    customer::{Customer, Language},
    service::Service,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailability {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub name_fr: String,
    pub name_pt: String,
    pub name_en: String,
    pub description_fr: String,
    pub description_pt: String,
    pub description_en: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCustomer {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub preferred_language: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub service_id: Uuid,
    pub appointment_date: NaiveDateTime,
    pub status: String,
    pub notes: Option<String>,
    pub payment_status: String,
    pub payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbAvailability> for AvailabilityWindow {
    type Error = Report;

    fn try_from(row: DbAvailability) -> Result<Self, Self::Error> {
        AvailabilityWindow::new(
            row.id,
            row.date,
            row.start_time,
            row.end_time,
            row.is_available,
        )
        .map_err(|e| eyre!("Corrupt availability row {}: {}", row.id, e))
    }
}

impl From<DbService> for Service {
    fn from(row: DbService) -> Self {
        Service {
            id: row.id,
            name_fr: row.name_fr,
            name_pt: row.name_pt,
            name_en: row.name_en,
            description_fr: row.description_fr,
            description_pt: row.description_pt,
            description_en: row.description_en,
            price_cents: row.price_cents,
            duration_minutes: row.duration_minutes,
            is_active: row.is_active,
        }
    }
}

impl TryFrom<DbCustomer> for Customer {
    type Error = Report;

    fn try_from(row: DbCustomer) -> Result<Self, Self::Error> {
        let preferred_language: Language = row
            .preferred_language
            .parse()
            .map_err(|e| eyre!("Corrupt customer row {}: {}", row.id, e))?;

        Ok(Customer {
            id: row.id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            preferred_language,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = Report;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        let status: AppointmentStatus = row
            .status
            .parse()
            .map_err(|e| eyre!("Corrupt appointment row {}: {}", row.id, e))?;
        let payment_status: PaymentStatus = row
            .payment_status
            .parse()
            .map_err(|e| eyre!("Corrupt appointment row {}: {}", row.id, e))?;

        Ok(Appointment {
            id: row.id,
            customer_id: row.customer_id,
            service_id: row.service_id,
            appointment_date: row.appointment_date,
            status,
            notes: row.notes,
            payment_status,
            payment_id: row.payment_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
