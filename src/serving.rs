//! Scales a catalog entry's reference nutrition to a requested portion.

use crate::error::{Error, Result};
use crate::models::{FoodReference, Nutrients, ServingUnit};

/// Gram weight assumed for one unit when a unit-based food does not declare
/// its own.
pub const DEFAULT_GRAMS_PER_UNIT: f64 = 100.0;

/// Scale `food`'s per-100g/ml values to the requested quantity.
///
/// Calories are rounded to the nearest integer, macros to one decimal,
/// matching what the line-item display shows. Zero quantity is allowed and
/// yields zeros; a negative quantity is rejected.
///
/// This is a pure function and is meant to be re-run on every quantity or
/// unit change rather than cached.
pub fn scale(food: &FoodReference, quantity: f64, unit: ServingUnit) -> Result<Nutrients> {
    if quantity < 0.0 {
        return Err(Error::invalid_argument(format!(
            "quantity must be non-negative, got {quantity}"
        )));
    }

    let multiplier = match unit {
        ServingUnit::Grams | ServingUnit::Milliliters => quantity / 100.0,
        ServingUnit::Units => {
            quantity * food.grams_per_unit.unwrap_or(DEFAULT_GRAMS_PER_UNIT) / 100.0
        }
    };

    Ok(Nutrients {
        calories: (food.nutrients.calories * multiplier).round(),
        protein: round_tenth(food.nutrients.protein * multiplier),
        carbs: round_tenth(food.nutrients.carbs * multiplier),
        fat: round_tenth(food.nutrients.fat * multiplier),
    })
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
