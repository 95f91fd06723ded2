//! CLI error types for structured error handling.
//!
//! Session commands return `anyhow` errors; this module classifies them
//! into typed errors with a hint and an exit code.

use std::fmt;

use budget_core::LedgerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (entry id)
    NotFound { message: String, hint: String },

    /// Invalid user input (validation failures, bad arguments)
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// Anything else
    Other(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
            CliError::Other(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error without a hint.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Classify an error returned by a session command.
    pub fn classify(err: &anyhow::Error) -> Self {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            return cli_err.clone_shallow();
        }
        match err.downcast_ref::<LedgerError>() {
            Some(LedgerError::Validation(validation)) => Self::invalid_input_with_hint(
                err.to_string(),
                format!("Check the {} and try again.", validation.field()),
            ),
            Some(LedgerError::InvalidInput(_)) => Self::invalid_input(err.to_string()),
            Some(LedgerError::NotFound(_)) => {
                Self::not_found(err.to_string(), "Run `list` to see entry IDs.")
            }
            Some(LedgerError::Storage(_)) | None => Self::Other(err.to_string()),
        }
    }

    fn clone_shallow(&self) -> Self {
        match self {
            CliError::NotFound { message, hint } => Self::not_found(message.clone(), hint.clone()),
            CliError::InvalidInput { message, hint } => CliError::InvalidInput {
                message: message.clone(),
                hint: hint.clone(),
            },
            CliError::Other(message) => CliError::Other(message.clone()),
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint.as_str()),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::Other(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Other(_) => exit_codes::FAILURE,
        }
    }
}
