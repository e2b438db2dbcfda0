//! Unit tests for domain error types

#[cfg(test)]
mod domain_error_tests;
