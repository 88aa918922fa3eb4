//! Error types for the nutrients crate.

use thiserror::Error;

/// Result type alias for nutrient operations.
pub type Result<T> = std::result::Result<T, NutrientError>;

/// Errors that can occur when constructing a nutrient value.
#[derive(Debug, Error)]
pub enum NutrientError {
    /// A macro amount was negative
    #[error("nutrient amount '{field}' must be non-negative, got {value}")]
    Negative {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A macro amount was NaN or infinite
    #[error("nutrient amount '{field}' must be a finite number")]
    NotFinite {
        /// Name of the offending field
        field: &'static str,
    },
}
