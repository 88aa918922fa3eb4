//! Error types for the database crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for database operations.
pub type Result<T> = std::result::Result<T, DbError>;

/// Errors that can occur while loading or querying the food database.
#[derive(Debug, Error)]
pub enum DbError {
    /// The on-disk database has not been installed yet
    #[error(
        "food database not installed at '{path}'; run 'nutrifind install' to download it"
    )]
    NotInstalled {
        /// Expected location of the database file
        path: PathBuf,
    },

    /// Two dataset entries share the same food name
    #[error("multiple entries for food '{0}' found in dataset")]
    DuplicateFood(String),

    /// A nutrient was reported in an unexpected unit
    #[error("expected nutrient '{nutrient}' to be in units '{expected}', but got '{actual}'")]
    UnitMismatch {
        /// Upstream nutrient name
        nutrient: String,
        /// The unit the conversion requires
        expected: &'static str,
        /// The unit the dataset carried
        actual: String,
    },

    /// A food entry carried no carbohydrate amount
    #[error("food '{0}' has no carbohydrate amount")]
    MissingCarbohydrate(String),

    /// The dataset structure did not match the expected shape
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    /// Exact lookup failed
    #[error("did not find exact name '{0}' in database; use search to find existing matches")]
    FoodNotFound(String),

    /// Reading or writing the database file failed
    #[error("database I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The database file or dataset was not valid JSON
    #[error("database JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A nutrient amount failed validation
    #[error(transparent)]
    Nutrient(#[from] nutrifind_nutrients::NutrientError),
}
