//! Macro-nutrient value model for Nutrifind.
//!
//! This crate provides:
//! - An immutable [`Nutrients`] value tracking fat, carbs, protein, and fiber
//! - Elementwise and scalar-broadcast arithmetic for scaling servings and summing meals
//! - Calorie estimation from the macro amounts
//!
//! # Example
//!
//! ```
//! use nutrifind_nutrients::Nutrients;
//!
//! // Per-gram values for an apple
//! let apple = Nutrients::new(0.0, 0.14, 0.003, 0.024).unwrap();
//!
//! // One medium apple is about 180 grams
//! let serving = apple.multiply(180.0);
//! assert!((serving.calories() - 180.0 * apple.calories()).abs() < 1e-9);
//! ```

mod error;
mod ops;

pub use error::{NutrientError, Result};
pub use ops::Operand;

use std::fmt;

/// Energy contributed by one gram of fat, in kilocalories.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Energy contributed by one gram of carbohydrates, in kilocalories.
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy contributed by one gram of protein, in kilocalories.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Raw macro amounts, in grams, with every field defaulting to zero.
///
/// This is the plain-data shape used to construct [`Nutrients`] and the
/// serde shape of one food entry in the on-disk database: `carbs` is
/// mandatory there (it is the discriminating field upstream), the rest
/// default to zero when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MacroAmounts {
    /// Total fat, in grams
    #[serde(default)]
    pub fat: f64,
    /// Total carbohydrates, in grams
    pub carbs: f64,
    /// Total protein, in grams
    #[serde(default)]
    pub protein: f64,
    /// Total fiber, in grams
    #[serde(default)]
    pub fiber: f64,
}

/// An immutable vector of macro-nutrient amounts, in grams.
///
/// Construction validates that every field is finite and non-negative.
/// Arithmetic results are new values and are deliberately *not* re-validated:
/// subtracting a consumed portion from a meal may legitimately go negative,
/// and dividing by zero follows ordinary `f64` semantics.
///
/// Equality is exact field-by-field `f64` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct Nutrients {
    fat: f64,
    carbs: f64,
    protein: f64,
    fiber: f64,
}

impl Nutrients {
    /// Creates a new value from the four macro amounts, in grams.
    ///
    /// # Errors
    /// Returns [`NutrientError::NotFinite`] if any amount is NaN or infinite,
    /// and [`NutrientError::Negative`] if any amount is below zero.
    pub fn new(fat: f64, carbs: f64, protein: f64, fiber: f64) -> Result<Self> {
        Ok(Self {
            fat: check_macro("fat", fat)?,
            carbs: check_macro("carbs", carbs)?,
            protein: check_macro("protein", protein)?,
            fiber: check_macro("fiber", fiber)?,
        })
    }

    /// Creates a new value from a [`MacroAmounts`], validating every field.
    pub fn from_amounts(amounts: MacroAmounts) -> Result<Self> {
        Self::new(amounts.fat, amounts.carbs, amounts.protein, amounts.fiber)
    }

    /// Total fat, in grams.
    #[inline]
    pub fn fat(&self) -> f64 {
        self.fat
    }

    /// Total carbohydrates, in grams.
    #[inline]
    pub fn carbs(&self) -> f64 {
        self.carbs
    }

    /// Total protein, in grams.
    #[inline]
    pub fn protein(&self) -> f64 {
        self.protein
    }

    /// Total fiber, in grams.
    #[inline]
    pub fn fiber(&self) -> f64 {
        self.fiber
    }

    /// Total energy, in Calories (kilocalories).
    ///
    /// Estimated from the heuristic that one gram of fat, carbs, and protein
    /// contains 9 kcal, 4 kcal, and 4 kcal respectively. Fiber does not
    /// contribute. Always recomputed from the fields, never stored.
    #[inline]
    pub fn calories(&self) -> f64 {
        KCAL_PER_GRAM_FAT * self.fat
            + KCAL_PER_GRAM_CARBS * self.carbs
            + KCAL_PER_GRAM_PROTEIN * self.protein
    }

    /// The raw macro amounts of this value.
    #[inline]
    pub fn amounts(&self) -> MacroAmounts {
        MacroAmounts {
            fat: self.fat,
            carbs: self.carbs,
            protein: self.protein,
            fiber: self.fiber,
        }
    }

    /// Builds a value directly from already-checked fields.
    ///
    /// Arithmetic results skip validation on purpose (see type docs).
    #[inline]
    pub(crate) fn from_raw(fat: f64, carbs: f64, protein: f64, fiber: f64) -> Self {
        Self { fat, carbs, protein, fiber }
    }
}

impl fmt::Display for Nutrients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Nutrients(fat={}, carbs={}, protein={}, fiber={}, calories={})",
            self.fat,
            self.carbs,
            self.protein,
            self.fiber,
            self.calories()
        )
    }
}

fn check_macro(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(NutrientError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(NutrientError::Negative { field, value });
    }
    Ok(value)
}
