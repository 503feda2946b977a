//! Database Module
//!
//! PostgreSQL connection pool and table bootstrap.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseSettings;

/// DDL for the loan application table. Safe to run on every start.
pub const CREATE_LOAN_APPLICATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS loan_applications (
    id               BIGSERIAL PRIMARY KEY,
    applicant_name   TEXT NOT NULL,
    loan_amount      NUMERIC(19, 2) NOT NULL,
    application_date DATE NOT NULL,
    status           TEXT NOT NULL,
    email            TEXT,
    phone_number     TEXT,
    income           NUMERIC(19, 2),
    credit_score     INTEGER
)
"#;

/// Create a PostgreSQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(&settings.url)
        .await
}

/// Create the loan application table if it does not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_LOAN_APPLICATIONS_TABLE)
        .execute(pool)
        .await?;
    Ok(())
}
