//! Error types for abacus-core

use thiserror::Error;

use crate::calc::EvalError;

/// Result type alias using abacus-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in abacus-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Blob storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted record failed schema validation on read
    #[error("Corrupt record under `{key}`: {reason}")]
    CorruptRecord { key: String, reason: String },

    /// Arithmetic expression could not be evaluated
    #[error("Expression error: {0}")]
    Expression(#[from] EvalError),
}
