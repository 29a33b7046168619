use crate::models::DbCustomer;
use chrono::Utc;
use eyre::Result;
use osteo_core::models::customer::UpsertCustomerRequest;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn upsert_customer(
    pool: &Pool<Postgres>,
    customer: &UpsertCustomerRequest,
) -> Result<DbCustomer> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let customer = sqlx::query_as::<_, DbCustomer>(
        r#"
        INSERT INTO customers (id, email, first_name, last_name, phone, preferred_language, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        ON CONFLICT (email)
        DO UPDATE SET first_name = $3, last_name = $4, phone = $5, preferred_language = $6, updated_at = $7
        RETURNING id, email, first_name, last_name, phone, preferred_language, created_at
        "#,
    )
    .bind(id)
    .bind(&customer.email)
    .bind(&customer.first_name)
    .bind(&customer.last_name)
    .bind(&customer.phone)
    .bind(customer.preferred_language.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(customer)
}

pub async fn get_customer_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCustomer>> {
    let customer = sqlx::query_as::<_, DbCustomer>(
        r#"
        SELECT id, email, first_name, last_name, phone, preferred_language, created_at
        FROM customers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(customer)
}
