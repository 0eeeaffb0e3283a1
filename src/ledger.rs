//! The meal ledger: meal slots, line items and check-in status for today.
//!
//! Every operation takes the current profile, mutates it in place and keeps
//! the per-meal aggregates equal to the sum over line items. The caller is
//! responsible for persisting the profile afterwards (see [`crate::store`]).

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

use crate::error::{Error, Result};
use crate::ids;
use crate::models::{FoodLineItem, Meal, MealStatus, Nutrients, Profile, ServingUnit, WeightEntry};

/// Create a new meal slot with pending status and no items.
pub fn create_meal(profile: &mut Profile, name: &str, time: NaiveTime) -> Result<Meal> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation("meal name must not be empty"));
    }

    let meal = Meal {
        id: ids::fresh("meal-"),
        name: name.to_string(),
        time,
        nutrients: Nutrients::default(),
        status: MealStatus::Pending,
        last_status_at: None,
        items: Vec::new(),
    };
    tracing::debug!(meal = %meal.id, name, time = %time.format("%H:%M"), "meal created");
    profile.meal_history.push(meal.clone());
    Ok(meal)
}

/// Remove a meal and all its line items. Unknown ids are a silent no-op.
pub fn delete_meal(profile: &mut Profile, meal_id: &str) {
    let before = profile.meal_history.len();
    profile.meal_history.retain(|m| m.id != meal_id);
    if profile.meal_history.len() < before {
        tracing::debug!(meal = meal_id, "meal removed");
    }
}

/// Append a line item with pre-scaled nutrient values (from
/// [`crate::serving::scale`]) and return the updated meal.
///
/// The display name embeds the portion, e.g. "Peito de Frango (150g)".
pub fn add_line_item(
    profile: &mut Profile,
    meal_id: &str,
    food_name: &str,
    quantity: f64,
    unit: ServingUnit,
    scaled: Nutrients,
) -> Result<Meal> {
    let meal = meal_mut(profile, meal_id)?;
    let item = FoodLineItem {
        id: ids::fresh("item-"),
        name: format!("{food_name} ({quantity}{unit})"),
        nutrients: scaled,
    };
    tracing::debug!(meal = %meal.id, item = %item.id, name = %item.name, "line item added");
    meal.items.push(item);
    meal.recompute_totals();
    Ok(meal.clone())
}

/// Remove a line item and recompute the meal aggregates. Unknown item ids
/// are a no-op; an unknown meal id is an error.
pub fn remove_line_item(profile: &mut Profile, meal_id: &str, item_id: &str) -> Result<Meal> {
    let meal = meal_mut(profile, meal_id)?;
    let before = meal.items.len();
    meal.items.retain(|i| i.id != item_id);
    if meal.items.len() < before {
        meal.recompute_totals();
        tracing::debug!(meal = %meal.id, item = item_id, "line item removed");
    }
    Ok(meal.clone())
}

/// A meal can only be checked in once its scheduled time has passed.
///
/// Only the time of day is compared; meals scheduled for another calendar
/// day are not accounted for.
pub fn is_eligible_for_status_change(meal: &Meal, now: NaiveTime) -> bool {
    now >= meal.time
}

/// Transition a meal's check-in status.
///
/// Completed/Failed require [`is_eligible_for_status_change`] to hold for
/// `now`; moving back to Pending is always allowed (used by the daily reset
/// and by explicit un-marking). Stamps the last-status-change timestamp on
/// success.
pub fn set_status(
    profile: &mut Profile,
    meal_id: &str,
    status: MealStatus,
    now: DateTime<Local>,
) -> Result<Meal> {
    let meal = meal_mut(profile, meal_id)?;
    if status != MealStatus::Pending && !is_eligible_for_status_change(meal, now.time()) {
        return Err(Error::Ineligible {
            meal: meal.id.clone(),
            scheduled: meal.time,
        });
    }
    meal.status = status;
    meal.last_status_at = Some(now.with_timezone(&Utc));
    tracing::info!(meal = %meal.id, ?status, "meal status updated");
    Ok(meal.clone())
}

/// Add water to today's counter and return the new total (ml).
pub fn add_water(profile: &mut Profile, amount_ml: f64) -> Result<f64> {
    if amount_ml < 0.0 {
        return Err(Error::invalid_argument(format!(
            "water amount must be non-negative, got {amount_ml}"
        )));
    }
    profile.water_intake += amount_ml;
    Ok(profile.water_intake)
}

/// Record a weight measurement: appends to the evolution history and updates
/// the current weight. Weight is in kg.
pub fn log_weight(profile: &mut Profile, date: NaiveDate, weight_kg: f64) -> Result<()> {
    if weight_kg <= 0.0 {
        return Err(Error::invalid_argument(format!(
            "weight must be positive, got {weight_kg}"
        )));
    }
    profile.weight_history.push(WeightEntry {
        label: date.format("%d/%m").to_string(),
        weight: weight_kg,
        date,
    });
    profile.weight = weight_kg;
    tracing::debug!(user = %profile.email, %date, weight_kg, "weight logged");
    Ok(())
}

fn meal_mut<'a>(profile: &'a mut Profile, meal_id: &str) -> Result<&'a mut Meal> {
    profile
        .meal_history
        .iter_mut()
        .find(|m| m.id == meal_id)
        .ok_or_else(|| Error::not_found("meal", meal_id))
}
