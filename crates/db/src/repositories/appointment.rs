use crate::models::DbAppointment;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use eyre::{eyre, Result};
use osteo_core::models::appointment::{AppointmentFilter, AppointmentStatus, NewAppointment};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a pending appointment.
///
/// Returns `None` when a live appointment already holds the same start time;
/// the partial unique index on `appointment_date` makes the insert a no-op.
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment,
) -> Result<Option<DbAppointment>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: id={}, customer_id={}, service_id={}, at={}",
        id,
        appointment.customer_id,
        appointment.service_id,
        appointment.appointment_date
    );

    let created = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (
            id, customer_id, service_id, appointment_date, status, notes,
            payment_status, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, 'pending', $5, 'pending', $6, $6)
        ON CONFLICT (appointment_date) WHERE status <> 'cancelled' DO NOTHING
        RETURNING id, customer_id, service_id, appointment_date, status, notes,
                  payment_status, payment_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(appointment.customer_id)
    .bind(appointment.service_id)
    .bind(appointment.appointment_date)
    .bind(appointment.notes.as_deref())
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if created.is_none() {
        tracing::debug!(
            "Slot {} already taken, appointment not created",
            appointment.appointment_date
        );
    }

    Ok(created)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, customer_id, service_id, appointment_date, status, notes,
               payment_status, payment_id, created_at, updated_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Start times of every non-cancelled appointment on `date`.
pub async fn get_booked_times_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<NaiveDateTime>> {
    let day_start = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| eyre!("Invalid day start for {}", date))?;
    let next_day = date
        .succ_opt()
        .and_then(|next| next.and_hms_opt(0, 0, 0))
        .ok_or_else(|| eyre!("No day after {}", date))?;

    let booked = sqlx::query_scalar::<_, NaiveDateTime>(
        r#"
        SELECT appointment_date
        FROM appointments
        WHERE appointment_date >= $1
          AND appointment_date < $2
          AND status <> 'cancelled'
        ORDER BY appointment_date ASC
        "#,
    )
    .bind(day_start)
    .bind(next_day)
    .fetch_all(pool)
    .await?;

    Ok(booked)
}

pub async fn get_appointments(
    pool: &Pool<Postgres>,
    filter: &AppointmentFilter,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, customer_id, service_id, appointment_date, status, notes,
               payment_status, payment_id, created_at, updated_at
        FROM appointments
        WHERE ($1::uuid IS NULL OR customer_id = $1)
          AND ($2::varchar IS NULL OR status = $2)
        ORDER BY appointment_date ASC
        "#,
    )
    .bind(filter.customer_id)
    .bind(filter.status.map(|status| status.as_str()))
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Outcome of a status change.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusUpdate<T> {
    Updated(T),
    NotFound,
    /// Reviving a cancelled appointment would double-book its slot.
    SlotTaken,
}

pub async fn update_appointment_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: AppointmentStatus,
) -> Result<StatusUpdate<DbAppointment>> {
    let result = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET status = $2, updated_at = $3
        WHERE id = $1
        RETURNING id, customer_id, service_id, appointment_date, status, notes,
                  payment_status, payment_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .bind(Utc::now())
    .fetch_optional(pool)
    .await;

    match result {
        Ok(Some(appointment)) => Ok(StatusUpdate::Updated(appointment)),
        Ok(None) => Ok(StatusUpdate::NotFound),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            tracing::debug!("Appointment {} cannot become {}: slot taken", id, status);
            Ok(StatusUpdate::SlotTaken)
        }
        Err(e) => Err(e.into()),
    }
}
