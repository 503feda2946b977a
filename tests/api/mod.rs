mod health_tests;
mod loan_tests;
