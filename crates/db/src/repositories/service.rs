use crate::models::DbService;
use chrono::Utc;
use eyre::Result;
use osteo_core::models::service::CreateServiceRequest;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(
    pool: &Pool<Postgres>,
    service: &CreateServiceRequest,
) -> Result<DbService> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (
            id, name_fr, name_pt, name_en,
            description_fr, description_pt, description_en,
            price_cents, duration_minutes, is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
        RETURNING id, name_fr, name_pt, name_en, description_fr, description_pt, description_en,
                  price_cents, duration_minutes, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(&service.name_fr)
    .bind(&service.name_pt)
    .bind(&service.name_en)
    .bind(&service.description_fr)
    .bind(&service.description_pt)
    .bind(&service.description_en)
    .bind(service.price_cents)
    .bind(service.duration_minutes)
    .bind(service.is_active)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name_fr, name_pt, name_en, description_fr, description_pt, description_en,
               price_cents, duration_minutes, is_active, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn get_services(pool: &Pool<Postgres>, include_inactive: bool) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name_fr, name_pt, name_en, description_fr, description_pt, description_en,
               price_cents, duration_minutes, is_active, created_at
        FROM services
        WHERE is_active = TRUE OR $1
        ORDER BY price_cents ASC, name_fr ASC
        "#,
    )
    .bind(include_inactive)
    .fetch_all(pool)
    .await?;

    Ok(services)
}
