//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::LoanApplication;

/// Loan application response. Amounts are written as exact JSON numbers
/// carrying their stored scale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationResponse {
    pub id: Option<i64>,
    pub applicant_name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub loan_amount: Decimal,
    pub application_date: NaiveDate,
    pub status: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub income: Option<Decimal>,
    pub credit_score: Option<i32>,
}

impl From<LoanApplication> for LoanApplicationResponse {
    fn from(application: LoanApplication) -> Self {
        Self {
            id: application.id,
            applicant_name: application.applicant_name,
            loan_amount: application.loan_amount,
            application_date: application.application_date,
            status: application.status,
            email: application.email,
            phone_number: application.phone_number,
            income: application.income,
            credit_score: application.credit_score,
        }
    }
}
