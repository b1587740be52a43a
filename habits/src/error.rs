//! Typed errors for the store and the habit operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing the backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("decode {}: {source}", path.display())]
    Decode { path: PathBuf, source: csv::Error },

    #[error("encode {}: {source}", path.display())]
    Encode { path: PathBuf, source: csv::Error },

    #[error("malformed row {row} in {}: {message}", path.display())]
    Malformed {
        path: PathBuf,
        row: u64,
        message: String,
    },

    /// Failure reported by a non-file backend.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a habit operation, classified by how a caller should react.
#[derive(Debug, Error)]
pub enum HabitError {
    /// The request is missing a required field.
    #[error("{0}")]
    Validation(String),

    #[error("habit not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type HabitResult<T> = Result<T, HabitError>;
