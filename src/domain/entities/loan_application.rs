//! Loan application entity and repository trait.
//!
//! Maps to the `loan_applications` table in the database schema.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::shared::error::StorageError;

/// Status assigned to applications created without one.
pub const DEFAULT_STATUS: &str = "PENDING";

/// Represents a single loan application.
///
/// Maps to the `loan_applications` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - applicant_name: TEXT NOT NULL
/// - loan_amount: NUMERIC(19,2) NOT NULL
/// - application_date: DATE NOT NULL
/// - status: TEXT NOT NULL
/// - email: TEXT NULL
/// - phone_number: TEXT NULL
/// - income: NUMERIC(19,2) NULL
/// - credit_score: INTEGER NULL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanApplication {
    /// Storage-assigned key, `None` until first saved
    pub id: Option<i64>,

    pub applicant_name: String,

    pub loan_amount: Decimal,

    pub application_date: NaiveDate,

    /// Free-form; PENDING, APPROVED and REJECTED are conventional
    pub status: String,

    pub email: Option<String>,

    pub phone_number: Option<String>,

    pub income: Option<Decimal>,

    pub credit_score: Option<i32>,
}

impl LoanApplication {
    /// Check whether the record has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Replace every attribute except `id` with those of `other`.
    pub fn overwrite_from(&mut self, other: LoanApplication) {
        let LoanApplication {
            id: _,
            applicant_name,
            loan_amount,
            application_date,
            status,
            email,
            phone_number,
            income,
            credit_score,
        } = other;

        self.applicant_name = applicant_name;
        self.loan_amount = loan_amount;
        self.application_date = application_date;
        self.status = status;
        self.email = email;
        self.phone_number = phone_number;
        self.income = income;
        self.credit_score = credit_score;
    }
}

/// Repository trait for loan application data access.
///
/// Every operation touches a single row.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanApplicationRepository: Send + Sync {
    /// Insert the record when it has no id, otherwise overwrite the row with its id.
    async fn save(&self, application: LoanApplication) -> Result<LoanApplication, StorageError>;

    /// Find an application by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<LoanApplication>, StorageError>;

    /// Every stored application.
    async fn find_all(&self) -> Result<Vec<LoanApplication>, StorageError>;

    /// Delete by id. Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError>;

    /// Round-trip to the backing store.
    async fn ping(&self) -> Result<(), StorageError>;
}
