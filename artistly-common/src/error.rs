//! Common error types for Artistly

use std::collections::BTreeMap;

use thiserror::Error;

use crate::onboarding::FormField;

/// Common result type for Artistly operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Artistly crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bundled or overridden data file could not be parsed
    #[error("Data error: {0}")]
    Data(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// One or more onboarding fields failed validation
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(BTreeMap<FormField, String>),

    /// Onboarding form already reached its terminal state
    #[error("Application already submitted")]
    AlreadySubmitted,
}
