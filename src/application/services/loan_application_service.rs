//! Loan Application Service
//!
//! Handles loan application record management. The only rules applied are
//! the two creation defaults: a missing application date becomes today, and
//! a missing or empty status becomes `PENDING`.
//!
//! Updates replace the whole record. A field left out of an update body is
//! cleared rather than kept, so clients must send every value they want to
//! keep.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{LoanApplication, LoanApplicationRepository, DEFAULT_STATUS};
use crate::infrastructure::metrics;
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::error::StorageError;

/// Loan application service trait
#[async_trait]
pub trait LoanApplicationService: Send + Sync {
    /// Get every stored application
    async fn list_all(&self) -> Result<Vec<LoanApplication>, LoanApplicationError>;

    /// Get application by ID
    async fn get_by_id(&self, id: i64) -> Result<LoanApplication, LoanApplicationError>;

    /// Check whether an application exists
    async fn exists(&self, id: i64) -> Result<bool, LoanApplicationError>;

    /// Create a new application, applying date and status defaults
    async fn create(&self, input: LoanApplicationInput) -> Result<LoanApplication, LoanApplicationError>;

    /// Replace every field of an existing application
    async fn update(&self, id: i64, input: LoanApplicationInput) -> Result<LoanApplication, LoanApplicationError>;

    /// Delete application. Does not check existence.
    async fn delete_by_id(&self, id: i64) -> Result<(), LoanApplicationError>;
}

/// Incoming loan application values
#[derive(Debug, Clone, Default)]
pub struct LoanApplicationInput {
    pub applicant_name: Option<String>,
    pub loan_amount: Option<Decimal>,
    pub application_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub income: Option<Decimal>,
    pub credit_score: Option<i32>,
}

impl LoanApplicationInput {
    /// Build an unsaved record, failing on the first absent NOT NULL column.
    fn into_record(self) -> Result<LoanApplication, LoanApplicationError> {
        Ok(LoanApplication {
            id: None,
            applicant_name: self
                .applicant_name
                .ok_or(LoanApplicationError::MissingField("applicantName"))?,
            loan_amount: self
                .loan_amount
                .ok_or(LoanApplicationError::MissingField("loanAmount"))?,
            application_date: self
                .application_date
                .ok_or(LoanApplicationError::MissingField("applicationDate"))?,
            status: self
                .status
                .ok_or(LoanApplicationError::MissingField("status"))?,
            email: self.email,
            phone_number: self.phone_number,
            income: self.income,
            credit_score: self.credit_score,
        })
    }
}

/// Loan application service errors
#[derive(Debug, thiserror::Error)]
pub enum LoanApplicationError {
    #[error("Loan application not found")]
    NotFound,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// LoanApplicationService implementation
pub struct LoanApplicationServiceImpl<R>
where
    R: LoanApplicationRepository + ?Sized,
{
    loan_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> LoanApplicationServiceImpl<R>
where
    R: LoanApplicationRepository + ?Sized,
{
    pub fn new(loan_repo: Arc<R>) -> Self {
        Self::with_clock(loan_repo, Arc::new(SystemClock))
    }

    pub fn with_clock(loan_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { loan_repo, clock }
    }
}

#[async_trait]
impl<R> LoanApplicationService for LoanApplicationServiceImpl<R>
where
    R: LoanApplicationRepository + ?Sized + 'static,
{
    async fn list_all(&self) -> Result<Vec<LoanApplication>, LoanApplicationError> {
        Ok(self.loan_repo.find_all().await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<LoanApplication, LoanApplicationError> {
        self.loan_repo
            .find_by_id(id)
            .await?
            .ok_or(LoanApplicationError::NotFound)
    }

    async fn exists(&self, id: i64) -> Result<bool, LoanApplicationError> {
        Ok(self.loan_repo.find_by_id(id).await?.is_some())
    }

    async fn create(&self, mut input: LoanApplicationInput) -> Result<LoanApplication, LoanApplicationError> {
        if input.application_date.is_none() {
            input.application_date = Some(self.clock.today());
        }
        if input.status.as_deref().map_or(true, str::is_empty) {
            input.status = Some(DEFAULT_STATUS.to_string());
        }

        let application = self.loan_repo.save(input.into_record()?).await?;

        tracing::info!(
            loan_id = ?application.id,
            status = %application.status,
            "Loan application created"
        );
        metrics::record_loan_operation("created");

        Ok(application)
    }

    async fn update(&self, id: i64, input: LoanApplicationInput) -> Result<LoanApplication, LoanApplicationError> {
        let mut existing = self
            .loan_repo
            .find_by_id(id)
            .await?
            .ok_or(LoanApplicationError::NotFound)?;

        existing.overwrite_from(input.into_record()?);

        let application = self.loan_repo.save(existing).await.map_err(|e| match e {
            // Deleted between the lookup and the write.
            StorageError::MissingRow(_) => LoanApplicationError::NotFound,
            e => LoanApplicationError::Storage(e),
        })?;

        tracing::info!(loan_id = id, status = %application.status, "Loan application updated");
        metrics::record_loan_operation("updated");

        Ok(application)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), LoanApplicationError> {
        self.loan_repo.delete_by_id(id).await?;

        tracing::info!(loan_id = id, "Loan application deleted");
        metrics::record_loan_operation("deleted");

        Ok(())
    }
}
