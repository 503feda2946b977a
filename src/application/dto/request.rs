//! Request DTOs
//!
//! Data structures for API request bodies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::application::services::LoanApplicationInput;

/// Loan application body for both create and full-replacement update.
///
/// Only presence is checked here. `id` is accepted so a client can send back
/// a record it received, but it is never used as a key.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationRequest {
    pub id: Option<i64>,

    #[validate(required(message = "applicantName is required"))]
    pub applicant_name: Option<String>,

    #[validate(required(message = "loanAmount is required"))]
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub loan_amount: Option<Decimal>,

    pub application_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub income: Option<Decimal>,
    pub credit_score: Option<i32>,
}

impl From<LoanApplicationRequest> for LoanApplicationInput {
    fn from(request: LoanApplicationRequest) -> Self {
        Self {
            applicant_name: request.applicant_name,
            loan_amount: request.loan_amount,
            application_date: request.application_date,
            status: request.status,
            email: request.email,
            phone_number: request.phone_number,
            income: request.income,
            credit_score: request.credit_score,
        }
    }
}
