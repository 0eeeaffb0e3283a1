//! Food catalog: the seeded system table plus the user's own library.
//!
//! System entries are immutable and shared by every profile; user entries
//! live inside the profile record and follow it through persistence.

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::ids;
use crate::models::{FoodReference, Nutrients, Profile, ServingUnit};

/// Search results are capped so the suggestion dropdown stays short.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Input for [`add_user_food`].
#[derive(Debug, Clone)]
pub struct NewFood {
    pub name: String,
    pub nutrients: Nutrients,
    pub unit: ServingUnit,
    pub grams_per_unit: Option<f64>,
}

/// The built-in food table. Values are per 100 g/ml; unit-based entries
/// declare the gram weight of one unit.
pub fn system_foods() -> &'static [FoodReference] {
    static FOODS: OnceLock<Vec<FoodReference>> = OnceLock::new();
    FOODS.get_or_init(|| {
        vec![
            entry("sys-frango", "Peito de Frango Grelhado", 165.0, 31.0, 0.0, 3.6, ServingUnit::Grams, None),
            entry("sys-arroz", "Arroz Branco Cozido", 130.0, 2.7, 28.0, 0.3, ServingUnit::Grams, None),
            entry("sys-feijao", "Feijão Carioca Cozido", 76.0, 4.8, 13.6, 0.5, ServingUnit::Grams, None),
            entry("sys-batata-doce", "Batata Doce Cozida", 86.0, 1.6, 20.1, 0.1, ServingUnit::Grams, None),
            entry("sys-carne", "Patinho Moído", 219.0, 35.9, 0.0, 7.3, ServingUnit::Grams, None),
            entry("sys-ovo", "Ovo de Galinha", 143.0, 12.6, 0.7, 9.5, ServingUnit::Units, Some(50.0)),
            entry("sys-banana", "Banana Prata", 89.0, 1.1, 22.8, 0.3, ServingUnit::Units, Some(70.0)),
            entry("sys-maca", "Maçã Fuji", 52.0, 0.3, 13.8, 0.2, ServingUnit::Units, Some(130.0)),
            entry("sys-pao", "Pão Francês", 300.0, 8.0, 58.6, 3.1, ServingUnit::Units, Some(50.0)),
            entry("sys-leite", "Leite Integral", 61.0, 3.2, 4.6, 3.2, ServingUnit::Milliliters, None),
            entry("sys-azeite", "Azeite de Oliva", 884.0, 0.0, 0.0, 100.0, ServingUnit::Milliliters, None),
            entry("sys-aveia", "Aveia em Flocos", 389.0, 16.9, 66.3, 6.9, ServingUnit::Grams, None),
            entry("sys-whey", "Whey Protein Concentrado", 400.0, 80.0, 10.0, 5.0, ServingUnit::Grams, None),
        ]
    })
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    unit: ServingUnit,
    grams_per_unit: Option<f64>,
) -> FoodReference {
    FoodReference {
        id: id.to_string(),
        name: name.to_string(),
        nutrients: Nutrients {
            calories,
            protein,
            carbs,
            fat,
        },
        unit,
        grams_per_unit,
    }
}

/// Case-insensitive substring search over the combined catalog, system
/// entries first, capped at [`MAX_SEARCH_RESULTS`].
pub fn search(profile: &Profile, query: &str) -> Vec<FoodReference> {
    let needle = query.to_lowercase();
    system_foods()
        .iter()
        .chain(profile.food_database.iter())
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .take(MAX_SEARCH_RESULTS)
        .cloned()
        .collect()
}

/// Add a food to the user's library and return the stored entry.
pub fn add_user_food(profile: &mut Profile, new: NewFood) -> Result<FoodReference> {
    let name = new.name.trim();
    if name.is_empty() {
        return Err(Error::validation("food name must not be empty"));
    }
    if !new.nutrients.is_non_negative() {
        return Err(Error::validation(
            "food nutrient values must not be negative",
        ));
    }

    let food = FoodReference {
        id: ids::fresh("food-"),
        name: name.to_string(),
        nutrients: new.nutrients,
        unit: new.unit,
        grams_per_unit: new.grams_per_unit,
    };
    tracing::debug!(food = %food.id, name = %food.name, "food added to user library");
    profile.food_database.push(food.clone());
    Ok(food)
}

/// Remove a food from the user's library by id.
///
/// Removing an unknown id is a silent no-op, mirroring the list-filter
/// behavior of the original app. System entries are not reachable here.
pub fn remove_user_food(profile: &mut Profile, food_id: &str) {
    let before = profile.food_database.len();
    profile.food_database.retain(|f| f.id != food_id);
    if profile.food_database.len() < before {
        tracing::debug!(food = food_id, "food removed from user library");
    }
}
