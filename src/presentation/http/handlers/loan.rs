//! Loan Application Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::{LoanApplicationRequest, LoanApplicationResponse};
use crate::application::services::LoanApplicationError;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<LoanApplicationError> for AppError {
    fn from(e: LoanApplicationError) -> Self {
        match e {
            LoanApplicationError::NotFound => AppError::NotFound,
            LoanApplicationError::MissingField(_) => AppError::Validation(e.to_string()),
            LoanApplicationError::Storage(e) => AppError::Storage(e),
        }
    }
}

fn parse_loan_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid loan application ID".into()))
}

/// List every loan application
pub async fn list_loans(
    State(state): State<AppState>,
) -> Result<Json<Vec<LoanApplicationResponse>>, AppError> {
    let loans = state.loans.list_all().await?;

    Ok(Json(loans.into_iter().map(LoanApplicationResponse::from).collect()))
}

/// Get loan application by ID
pub async fn get_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<String>,
) -> Result<Json<LoanApplicationResponse>, AppError> {
    let loan_id = parse_loan_id(&loan_id)?;

    let loan = state.loans.get_by_id(loan_id).await?;

    Ok(Json(LoanApplicationResponse::from(loan)))
}

/// Create a new loan application
pub async fn create_loan(
    State(state): State<AppState>,
    Json(body): Json<LoanApplicationRequest>,
) -> Result<(StatusCode, Json<LoanApplicationResponse>), AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let loan = state.loans.create(body.into()).await?;

    Ok((StatusCode::CREATED, Json(LoanApplicationResponse::from(loan))))
}

/// Replace a loan application
pub async fn update_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<String>,
    Json(body): Json<LoanApplicationRequest>,
) -> Result<Json<LoanApplicationResponse>, AppError> {
    let loan_id = parse_loan_id(&loan_id)?;

    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let loan = state.loans.update(loan_id, body.into()).await?;

    Ok(Json(LoanApplicationResponse::from(loan)))
}

/// Delete a loan application
pub async fn delete_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let loan_id = parse_loan_id(&loan_id)?;

    if !state.loans.exists(loan_id).await? {
        return Err(AppError::NotFound);
    }
    state.loans.delete_by_id(loan_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
