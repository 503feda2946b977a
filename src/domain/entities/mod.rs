//! # Domain Entities
//!
//! The loan application is the only entity. It maps directly to the
//! `loan_applications` table.
//!
//! ## Repository Traits
//!
//! The entity has an associated repository trait defining data access operations.
//! It is implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod loan_application;

pub use loan_application::{LoanApplication, LoanApplicationRepository, DEFAULT_STATUS};

#[cfg(test)]
pub use loan_application::MockLoanApplicationRepository;
