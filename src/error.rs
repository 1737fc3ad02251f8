//! Custom error types for bankdesk
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for bankdesk operations
#[derive(Error, Debug)]
pub enum BankError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The interactive input stream reached end of file
    #[error("Input stream closed")]
    InputClosed,

    /// The interactive input stream failed
    #[error("Can't read input: {0}")]
    Input(String),

    /// Validation errors for operator input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Insufficient funds
    #[error("Insufficient funds on account {account}: need {needed}, have {available}")]
    InsufficientFunds {
        account: u64,
        needed: i64,
        available: i64,
    },

    /// Credential hashing or verification errors
    #[error("Credential error: {0}")]
    Credentials(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BankError {
    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for services
    pub fn service_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Service",
            identifier: identifier.into(),
        }
    }

    /// Check if this error must terminate the interactive session
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InputClosed | Self::Input(_))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for bankdesk operations
pub type BankResult<T> = Result<T, BankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BankError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BankError::user_not_found("alice");
        assert_eq!(err.to_string(), "User not found: alice");
        assert!(err.is_not_found());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_input_errors_are_fatal() {
        assert!(BankError::InputClosed.is_fatal());
        assert!(BankError::Input("broken pipe".into()).is_fatal());
        assert!(!BankError::Validation("bad number".into()).is_fatal());
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = BankError::InsufficientFunds {
            account: 1001,
            needed: 500,
            available: 300,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds on account 1001: need 500, have 300"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let bank_err: BankError = io_err.into();
        assert!(matches!(bank_err, BankError::Io(_)));
    }
}
