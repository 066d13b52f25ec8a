//! Error types for Tailspin

use std::path::PathBuf;

use thiserror::Error;

/// Error thrown when a named seed dataset does not exist
#[derive(Debug, Error)]
#[error("Seed dataset '{name}' not found. Available datasets: {}", available.join(", "))]
pub struct DatasetNotFoundError {
    pub name: String,
    pub available: Vec<String>,
}

/// General Tailspin error type
#[derive(Debug, Error)]
pub enum TailspinError {
    #[error(transparent)]
    DatasetNotFound(#[from] DatasetNotFoundError),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid listen address '{host}:{port}'")]
    InvalidAddress { host: String, port: u16 },
}

pub type Result<T> = std::result::Result<T, TailspinError>;
