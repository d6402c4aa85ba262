use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] abacus_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No expression provided")]
    EmptyExpression,
    #[error("Invalid media ID: {0}")]
    InvalidMediaId(String),
    #[error("Media not found: {0}")]
    MediaNotFound(String),
    #[error("Refusing to {0} without --yes")]
    ConfirmationRequired(&'static str),
}
