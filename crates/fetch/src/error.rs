//! Error types for dataset retrieval.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while downloading or installing the dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("failed to get dataset from URL ({status}): {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// The requested URL
        url: String,
    },

    /// The archive did not contain exactly one file
    #[error("expected dataset archive to have exactly one entry, but got {entries}")]
    UnexpectedArchive {
        /// Number of entries found
        entries: usize,
    },

    /// Reading the zip archive failed
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A database file already exists at the install location
    #[error(
        "database already installed at '{path}'; pass overwrite to replace it"
    )]
    AlreadyInstalled {
        /// The occupied install location
        path: PathBuf,
    },

    /// Converting or persisting the dataset failed
    #[error(transparent)]
    Db(#[from] nutrifind_db::DbError),

    /// Reading or writing files failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive entry was not valid JSON
    #[error("dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
