use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name_fr VARCHAR(255) NOT NULL,
            name_pt VARCHAR(255) NOT NULL,
            name_en VARCHAR(255) NOT NULL,
            description_fr TEXT NOT NULL,
            description_pt TEXT NOT NULL,
            description_en TEXT NOT NULL,
            price_cents INTEGER NOT NULL CHECK (price_cents >= 0),
            duration_minutes INTEGER NOT NULL CHECK (duration_minutes >= 15),
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create customers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email VARCHAR(255) NOT NULL UNIQUE,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            phone VARCHAR(32) NOT NULL,
            preferred_language VARCHAR(2) NOT NULL DEFAULT 'fr',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create availability table, times are naive clinic-local
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            is_available BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_window CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            customer_id UUID NOT NULL REFERENCES customers(id),
            service_id UUID NOT NULL REFERENCES services(id),
            appointment_date TIMESTAMP WITHOUT TIME ZONE NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'pending'
                CHECK (status IN ('pending', 'confirmed', 'cancelled', 'completed')),
            notes TEXT NULL,
            payment_status VARCHAR(16) NOT NULL DEFAULT 'pending'
                CHECK (payment_status IN ('pending', 'paid', 'failed')),
            payment_id VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Two live appointments can never share a start time
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_appointments_live_slot
            ON appointments(appointment_date)
            WHERE status <> 'cancelled';
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one command per prepared statement
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_availability_date ON availability(date)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_customer_id ON appointments(customer_id)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_service_id ON appointments(service_id)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_status ON appointments(status)",
    ];
    for statement in indexes {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
