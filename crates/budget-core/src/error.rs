//! Error types for budget core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for budget operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Rejected input for a new entry.
///
/// Each variant names the field that failed. A store that returns one of
/// these has not been modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Description is empty after trimming whitespace
    #[error("description must not be empty")]
    EmptyDescription,

    /// Category is empty after trimming whitespace
    #[error("category must not be empty")]
    EmptyCategory,

    /// Amount parsed but is zero or negative
    #[error("amount must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),

    /// Amount is above the largest accepted value
    #[error("amount must not exceed {max} (got {got})")]
    AmountTooLarge { got: Decimal, max: Decimal },

    /// Amount is not a finite decimal number
    #[error("amount is not a valid number: {0:?}")]
    InvalidAmount(String),
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyDescription => "description",
            Self::EmptyCategory => "category",
            Self::NonPositiveAmount(_) | Self::AmountTooLarge { .. } | Self::InvalidAmount(_) => {
                "amount"
            }
        }
    }
}

/// Core error type for budget operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Entry input failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Text that could not be parsed into a core value (kind, id)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Shared store could not be accessed
    #[error("Storage error: {0}")]
    Storage(String),
}
