//! In-memory food record store.

use crate::error::{DbError, Result};
use nutrifind_nutrients::{MacroAmounts, Nutrients};
use std::collections::BTreeMap;

/// Grams of food the upstream dataset reports nutrient amounts for.
const REFERENCE_GRAMS: f64 = 100.0;

/// Immutable mapping from exact food name to per-gram [`Nutrients`].
///
/// Names are case-sensitive, exactly as ingested. The map is ordered, which
/// gives fuzzy search a deterministic candidate order for tie-breaking.
/// There is no mutation API after construction.
#[derive(Debug, Clone, Default)]
pub struct FoodDb {
    foods: BTreeMap<String, Nutrients>,
}

impl FoodDb {
    /// Builds a store from per-100-gram entries, normalizing every amount
    /// to per-gram values.
    ///
    /// # Errors
    /// Fails with [`DbError::DuplicateFood`] when two entries share a name
    /// and with [`DbError::Nutrient`] when an amount is negative or not
    /// finite.
    pub fn from_per_100g<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, MacroAmounts)>,
    {
        let mut foods = BTreeMap::new();

        for (name, per_100g) in entries {
            let per_gram = Nutrients::from_amounts(MacroAmounts {
                fat: per_100g.fat / REFERENCE_GRAMS,
                carbs: per_100g.carbs / REFERENCE_GRAMS,
                protein: per_100g.protein / REFERENCE_GRAMS,
                fiber: per_100g.fiber / REFERENCE_GRAMS,
            })?;

            if foods.insert(name.clone(), per_gram).is_some() {
                return Err(DbError::DuplicateFood(name));
            }
        }

        Ok(Self { foods })
    }

    /// Looks up a food by its exact name. Never falls back to fuzzy
    /// matching.
    ///
    /// # Errors
    /// Fails with [`DbError::FoodNotFound`] when the name is absent.
    pub fn get_exact(&self, name: &str) -> Result<&Nutrients> {
        self.foods
            .get(name)
            .ok_or_else(|| DbError::FoodNotFound(name.to_owned()))
    }

    /// Iterates over the stored food names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.foods.keys().map(String::as_str)
    }

    /// Iterates over `(name, per-gram nutrients)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Nutrients)> {
        self.foods.iter().map(|(name, n)| (name.as_str(), n))
    }

    /// Number of foods in the store.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the store holds no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// A defensive copy of the full mapping, independent of this store.
    pub fn to_map(&self) -> BTreeMap<String, Nutrients> {
        self.foods.clone()
    }
}
