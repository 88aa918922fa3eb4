//! Conversion from the upstream FoodData Central JSON shape.
//!
//! The upstream dataset is an object whose single top-level value is a list
//! of foods, each carrying a `description` and a `foodNutrients` list of
//! `{nutrient: {name, unitName}, amount}` records. The conversion scans the
//! records for a fixed set of nutrient names, sums contributions per macro,
//! and requires every matched nutrient to be reported in grams.

use crate::error::{DbError, Result};
use nutrifind_nutrients::MacroAmounts;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Unit every matched nutrient must be reported in.
const GRAM_UNIT: &str = "g";

/// Upstream nutrient names contributing to each tracked macro.
const FAT_CONTRIBUTORS: &[&str] = &["Total lipid (fat)"];
const PROTEIN_CONTRIBUTORS: &[&str] = &["Protein"];
const CARB_CONTRIBUTORS: &[&str] = &["Carbohydrate, by difference"];
const FIBER_CONTRIBUTORS: &[&str] = &["Fiber, total dietary"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFood {
    description: String,
    #[serde(default)]
    food_nutrients: Vec<RawFoodNutrient>,
}

#[derive(Debug, Deserialize)]
struct RawFoodNutrient {
    nutrient: RawNutrient,
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNutrient {
    name: String,
    unit_name: String,
}

/// Converts a parsed upstream dataset into per-100-gram entries, preserving
/// the dataset's food order.
///
/// # Errors
/// Fails with [`DbError::MalformedDataset`] when the top-level shape is not
/// an object holding a food list, [`DbError::UnitMismatch`] when a matched
/// nutrient is not in grams, [`DbError::MissingCarbohydrate`] when a food
/// has no carbohydrate record, and [`DbError::DuplicateFood`] when two
/// foods share a description.
pub fn convert_dataset(raw: &serde_json::Value) -> Result<Vec<(String, MacroAmounts)>> {
    let food_list = raw
        .as_object()
        .and_then(|map| map.values().next())
        .ok_or_else(|| {
            DbError::MalformedDataset(
                "expected a top-level object holding the food list".to_owned(),
            )
        })?;

    let foods = Vec::<RawFood>::deserialize(food_list)?;

    let mut seen = BTreeSet::new();
    let mut entries = Vec::with_capacity(foods.len());

    for food in foods {
        let amounts = macros_from_raw(&food)?;

        if !seen.insert(food.description.clone()) {
            return Err(DbError::DuplicateFood(food.description));
        }
        entries.push((food.description, amounts));
    }

    Ok(entries)
}

fn macros_from_raw(food: &RawFood) -> Result<MacroAmounts> {
    let fat = sum_contributors(food, FAT_CONTRIBUTORS)?;
    let protein = sum_contributors(food, PROTEIN_CONTRIBUTORS)?;
    let carbs = sum_contributors(food, CARB_CONTRIBUTORS)?;
    let fiber = sum_contributors(food, FIBER_CONTRIBUTORS)?;

    // Carbohydrate is the discriminating field upstream and may not default
    let carbs = carbs.ok_or_else(|| DbError::MissingCarbohydrate(food.description.clone()))?;

    Ok(MacroAmounts {
        fat: fat.unwrap_or(0.0),
        carbs,
        protein: protein.unwrap_or(0.0),
        fiber: fiber.unwrap_or(0.0),
    })
}

/// Sums all records whose nutrient name is one of `names`, in grams.
/// Returns `None` when no record matched.
fn sum_contributors(food: &RawFood, names: &[&str]) -> Result<Option<f64>> {
    let mut total = None;

    for record in &food.food_nutrients {
        if !names.contains(&record.nutrient.name.as_str()) {
            continue;
        }

        if record.nutrient.unit_name != GRAM_UNIT {
            return Err(DbError::UnitMismatch {
                nutrient: record.nutrient.name.clone(),
                expected: GRAM_UNIT,
                actual: record.nutrient.unit_name.clone(),
            });
        }

        let amount = record.amount.ok_or_else(|| {
            DbError::MalformedDataset(format!(
                "nutrient '{}' for food '{}' has no amount",
                record.nutrient.name, food.description
            ))
        })?;

        *total.get_or_insert(0.0) += amount;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nutrient(name: &str, unit: &str, amount: f64) -> serde_json::Value {
        json!({"nutrient": {"name": name, "unitName": unit}, "amount": amount})
    }

    fn apple() -> serde_json::Value {
        json!({
            "description": "Apple, raw",
            "foodNutrients": [
                nutrient("Carbohydrate, by difference", "g", 14.0),
                nutrient("Protein", "g", 0.3),
                nutrient("Fiber, total dietary", "g", 2.4),
                nutrient("Energy", "kcal", 52.0),
            ]
        })
    }

    #[test]
    fn test_convert_basic_entry() {
        let raw = json!({"SRLegacyFoods": [apple()]});
        let entries = convert_dataset(&raw).unwrap();
        assert_eq!(entries.len(), 1);

        let (name, amounts) = &entries[0];
        assert_eq!(name, "Apple, raw");
        assert_eq!(amounts.carbs, 14.0);
        assert_eq!(amounts.protein, 0.3);
        assert_eq!(amounts.fiber, 2.4);
        // No fat record defaults to zero
        assert_eq!(amounts.fat, 0.0);
    }

    #[test]
    fn test_unmatched_nutrients_ignored() {
        // The kcal Energy record must not trip the gram-unit check
        let raw = json!({"SRLegacyFoods": [apple()]});
        assert!(convert_dataset(&raw).is_ok());
    }

    #[test]
    fn test_contributions_are_summed() {
        let raw = json!({"SRLegacyFoods": [{
            "description": "Oil, blended",
            "foodNutrients": [
                nutrient("Total lipid (fat)", "g", 40.0),
                nutrient("Total lipid (fat)", "g", 60.0),
                nutrient("Carbohydrate, by difference", "g", 0.0),
            ]
        }]});
        let entries = convert_dataset(&raw).unwrap();
        assert_eq!(entries[0].1.fat, 100.0);
    }

    #[test]
    fn test_unit_mismatch_fails() {
        let raw = json!({"SRLegacyFoods": [{
            "description": "Broken",
            "foodNutrients": [
                nutrient("Carbohydrate, by difference", "mg", 14.0),
            ]
        }]});
        let err = convert_dataset(&raw).unwrap_err();
        assert!(matches!(
            err,
            DbError::UnitMismatch { expected: "g", ref actual, .. } if actual == "mg"
        ));
    }

    #[test]
    fn test_missing_carbohydrate_fails() {
        let raw = json!({"SRLegacyFoods": [{
            "description": "Mystery meat",
            "foodNutrients": [
                nutrient("Protein", "g", 20.0),
            ]
        }]});
        let err = convert_dataset(&raw).unwrap_err();
        assert!(matches!(
            err,
            DbError::MissingCarbohydrate(name) if name == "Mystery meat"
        ));
    }

    #[test]
    fn test_duplicate_description_fails() {
        let raw = json!({"SRLegacyFoods": [apple(), apple()]});
        let err = convert_dataset(&raw).unwrap_err();
        assert!(matches!(err, DbError::DuplicateFood(name) if name == "Apple, raw"));
    }

    #[test]
    fn test_top_level_must_be_object_with_value() {
        let err = convert_dataset(&json!([apple()])).unwrap_err();
        assert!(matches!(err, DbError::MalformedDataset(_)));

        let err = convert_dataset(&json!({})).unwrap_err();
        assert!(matches!(err, DbError::MalformedDataset(_)));
    }

    #[test]
    fn test_missing_amount_fails() {
        let raw = json!({"SRLegacyFoods": [{
            "description": "Broken",
            "foodNutrients": [
                {"nutrient": {"name": "Carbohydrate, by difference", "unitName": "g"}},
            ]
        }]});
        let err = convert_dataset(&raw).unwrap_err();
        assert!(matches!(err, DbError::MalformedDataset(_)));
    }
}
