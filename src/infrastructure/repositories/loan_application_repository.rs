//! Loan Application Repository Implementation
//!
//! PostgreSQL implementation of the LoanApplicationRepository trait.

use std::time::Instant;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::{LoanApplication, LoanApplicationRepository};
use crate::infrastructure::metrics;
use crate::shared::error::StorageError;

const TABLE: &str = "loan_applications";

/// Database row representation matching the loan_applications table schema.
#[derive(Debug, sqlx::FromRow)]
struct LoanApplicationRow {
    id: i64,
    applicant_name: String,
    loan_amount: Decimal,
    application_date: NaiveDate,
    status: String,
    email: Option<String>,
    phone_number: Option<String>,
    income: Option<Decimal>,
    credit_score: Option<i32>,
}

impl LoanApplicationRow {
    /// Convert database row to domain LoanApplication entity.
    fn into_loan_application(self) -> LoanApplication {
        LoanApplication {
            id: Some(self.id),
            applicant_name: self.applicant_name,
            loan_amount: self.loan_amount,
            application_date: self.application_date,
            status: self.status,
            email: self.email,
            phone_number: self.phone_number,
            income: self.income,
            credit_score: self.credit_score,
        }
    }
}

/// PostgreSQL loan application repository implementation.
#[derive(Clone)]
pub struct PgLoanApplicationRepository {
    pool: PgPool,
}

impl PgLoanApplicationRepository {
    /// Create a new PgLoanApplicationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, application: &LoanApplication) -> Result<LoanApplication, StorageError> {
        let row = sqlx::query_as::<_, LoanApplicationRow>(
            r#"
            INSERT INTO loan_applications
                (applicant_name, loan_amount, application_date, status,
                 email, phone_number, income, credit_score)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, applicant_name, loan_amount, application_date, status,
                      email, phone_number, income, credit_score
            "#,
        )
        .bind(&application.applicant_name)
        .bind(application.loan_amount)
        .bind(application.application_date)
        .bind(&application.status)
        .bind(&application.email)
        .bind(&application.phone_number)
        .bind(application.income)
        .bind(application.credit_score)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_loan_application())
    }

    async fn overwrite(
        &self,
        id: i64,
        application: &LoanApplication,
    ) -> Result<LoanApplication, StorageError> {
        let row = sqlx::query_as::<_, LoanApplicationRow>(
            r#"
            UPDATE loan_applications
            SET applicant_name = $2,
                loan_amount = $3,
                application_date = $4,
                status = $5,
                email = $6,
                phone_number = $7,
                income = $8,
                credit_score = $9
            WHERE id = $1
            RETURNING id, applicant_name, loan_amount, application_date, status,
                      email, phone_number, income, credit_score
            "#,
        )
        .bind(id)
        .bind(&application.applicant_name)
        .bind(application.loan_amount)
        .bind(application.application_date)
        .bind(&application.status)
        .bind(&application.email)
        .bind(&application.phone_number)
        .bind(application.income)
        .bind(application.credit_score)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::MissingRow(id))?;

        Ok(row.into_loan_application())
    }
}

#[async_trait]
impl LoanApplicationRepository for PgLoanApplicationRepository {
    async fn save(&self, application: LoanApplication) -> Result<LoanApplication, StorageError> {
        let start = Instant::now();
        let result = match application.id {
            None => self.insert(&application).await,
            Some(id) => self.overwrite(id, &application).await,
        };
        let operation = if application.is_persisted() { "update" } else { "insert" };
        metrics::record_db_query(operation, TABLE, start.elapsed().as_secs_f64());
        result
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<LoanApplication>, StorageError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, LoanApplicationRow>(
            r#"
            SELECT id, applicant_name, loan_amount, application_date, status,
                   email, phone_number, income, credit_score
            FROM loan_applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("select", TABLE, start.elapsed().as_secs_f64());

        Ok(row.map(|r| r.into_loan_application()))
    }

    async fn find_all(&self) -> Result<Vec<LoanApplication>, StorageError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, LoanApplicationRow>(
            r#"
            SELECT id, applicant_name, loan_amount, application_date, status,
                   email, phone_number, income, credit_score
            FROM loan_applications
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        metrics::record_db_query("select_all", TABLE, start.elapsed().as_secs_f64());

        Ok(rows.into_iter().map(|r| r.into_loan_application()).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError> {
        let start = Instant::now();
        sqlx::query("DELETE FROM loan_applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        metrics::record_db_query("delete", TABLE, start.elapsed().as_secs_f64());

        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
