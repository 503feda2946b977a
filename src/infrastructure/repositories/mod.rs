//! Repository Implementations
//!
//! Implementations of the domain repository trait.
//!
//! ## Available Repositories
//!
//! - **PgLoanApplicationRepository** - PostgreSQL-backed storage
//! - **InMemoryLoanApplicationRepository** - process-local storage for tests
//!   and database-less runs
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::PgLoanApplicationRepository;
//!
//! async fn setup_repository(pool: PgPool) {
//!     let loan_repo = PgLoanApplicationRepository::new(pool);
//! }
//! ```

pub mod loan_application_repository;
pub mod memory_repository;

pub use loan_application_repository::PgLoanApplicationRepository;
pub use memory_repository::InMemoryLoanApplicationRepository;
