use crate::models::DbAvailability;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_availability(
    pool: &Pool<Postgres>,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_available: bool,
) -> Result<DbAvailability> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let availability = sqlx::query_as::<_, DbAvailability>(
        r#"
        INSERT INTO availability (id, date, start_time, end_time, is_available, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING id, date, start_time, end_time, is_available, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(is_available)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(availability)
}

pub async fn get_active_availability_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<DbAvailability>> {
    let windows = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, date, start_time, end_time, is_available, created_at, updated_at
        FROM availability
        WHERE date = $1 AND is_available = TRUE
        ORDER BY start_time ASC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(windows)
}

pub async fn get_availability_from(
    pool: &Pool<Postgres>,
    from: NaiveDate,
) -> Result<Vec<DbAvailability>> {
    let windows = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, date, start_time, end_time, is_available, created_at, updated_at
        FROM availability
        WHERE date >= $1
        ORDER BY date ASC, start_time ASC
        "#,
    )
    .bind(from)
    .fetch_all(pool)
    .await?;

    Ok(windows)
}

pub async fn set_availability_flag(
    pool: &Pool<Postgres>,
    id: Uuid,
    is_available: bool,
) -> Result<Option<DbAvailability>> {
    let availability = sqlx::query_as::<_, DbAvailability>(
        r#"
        UPDATE availability
        SET is_available = $2, updated_at = $3
        WHERE id = $1
        RETURNING id, date, start_time, end_time, is_available, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(is_available)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(availability)
}
