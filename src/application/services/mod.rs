//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **LoanApplicationService**: Loan application CRUD with creation defaults

pub mod loan_application_service;

pub use loan_application_service::{
    LoanApplicationError, LoanApplicationInput, LoanApplicationService,
    LoanApplicationServiceImpl,
};
