//! # Loan Service Library
//!
//! This crate provides a record-management backend for loan applications:
//! - RESTful HTTP API under `/api/loans`
//! - PostgreSQL for persistent storage, or an in-memory store
//! - Health and Prometheus metrics endpoints
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The loan application entity and its repository trait
//! - **Application Layer**: The loan application service and DTOs
//! - **Infrastructure Layer**: Database, repository and metrics implementations
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! loan_service/
//! +-- config/         Configuration management
//! +-- domain/         Domain entity and repository trait
//! +-- application/    Application service and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, clock)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
