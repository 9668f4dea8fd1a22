//! Error handling for the checkers core.

pub mod domain;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{DomainError, ValidationKind};
