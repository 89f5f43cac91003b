//! Error types for the transaction-definition contract.

use thiserror::Error;

/// Errors that can occur when decoding transaction-definition values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// The integer is not the code of any propagation behavior.
    #[error("Unknown propagation code: {0}")]
    UnknownPropagationCode(i32),

    /// The integer is not the code of any isolation level.
    #[error("Unknown isolation code: {0}")]
    UnknownIsolationCode(i32),

    /// The string is not the canonical name of any propagation behavior.
    #[error("Unknown propagation name: {0:?}")]
    UnknownPropagationName(String),

    /// The string is not the canonical name of any isolation level.
    #[error("Unknown isolation name: {0:?}")]
    UnknownIsolationName(String),

    /// The timeout is below the datastore-default sentinel.
    #[error("Invalid timeout: {0} (must be non-negative or the default sentinel -1)")]
    InvalidTimeout(i32),
}

/// Result type for transaction-definition operations.
pub type DefinitionResult<T> = Result<T, DefinitionError>;
