use std::fmt;

use crate::model::ExpenseId;

/// Errors raised by the amortization calculator and the payment ledger
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// An input failed a precondition. `field` names the offending input so
    /// callers can point the user at it.
    InvalidInput {
        field: &'static str,
        reason: String,
    },
    /// The targeted expense does not exist
    NotFound(ExpenseId),
}

impl LedgerError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LedgerError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            LedgerError::InvalidInput { field, .. } => Some(field),
            LedgerError::NotFound(_) => None,
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::InvalidInput { field, reason } => {
                write!(f, "invalid {field}: {reason}")
            }
            LedgerError::NotFound(id) => write!(f, "expense {} not found", id.0),
        }
    }
}

impl std::error::Error for LedgerError {}

pub type Result<T> = std::result::Result<T, LedgerError>;
