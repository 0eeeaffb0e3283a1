use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Calories plus the three tracked macronutrients.
///
/// Used both for per-100g catalog values and for scaled/aggregated amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbs (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl Nutrients {
    /// Element-wise accumulation.
    pub fn add(&mut self, other: &Nutrients) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
    }

    /// True when no field is negative.
    pub fn is_non_negative(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }
}

/// The measure a catalog entry is defined against.
///
/// Gram- and milliliter-based foods carry values per 100 g/ml; unit-based
/// foods carry values per 100 g and declare a gram weight per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServingUnit {
    #[default]
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "un")]
    Units,
}

impl std::fmt::Display for ServingUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ServingUnit::Grams => "g",
            ServingUnit::Milliliters => "ml",
            ServingUnit::Units => "un",
        };
        f.write_str(s)
    }
}

/// The user's declared dietary goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalType {
    Cutting,
    Bulking,
    // Legacy records spell this in Portuguese
    #[default]
    #[serde(alias = "Manutenção")]
    Maintenance,
}

/// Check-in state of a meal for the current day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

/// A reusable nutrition record in the food catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodReference {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub nutrients: Nutrients,
    #[serde(default)]
    pub unit: ServingUnit,
    /// Gram weight of one unit; only meaningful when `unit` is `Units`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams_per_unit: Option<f64>,
}

/// One recorded quantity of a food within a meal.
///
/// Nutrient values are fixed at add-time, so later catalog edits never
/// retroactively change logged meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLineItem {
    pub id: String,
    /// Display name with the resolved portion, e.g. "Arroz Branco (150g)".
    pub name: String,
    #[serde(flatten)]
    pub nutrients: Nutrients,
}

/// A named, time-scheduled eating event for the current day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// Scheduled time of day, persisted as "HH:mm".
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Aggregate over `items`; kept in sync by the ledger on every change.
    #[serde(flatten)]
    pub nutrients: Nutrients,
    #[serde(default)]
    pub status: MealStatus,
    #[serde(
        default,
        rename = "lastStatusDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_status_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<FoodLineItem>,
}

impl Meal {
    /// Recompute the aggregate nutrients as the sum over current line items.
    ///
    /// Summed in insertion order so totals are reproducible.
    pub fn recompute_totals(&mut self) {
        let mut total = Nutrients::default();
        for item in &self.items {
            total.add(&item.nutrients);
        }
        self.nutrients = total;
    }
}

/// One point in the weight-evolution history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Short display label, e.g. "05/03" or "Hoje".
    pub label: String,
    /// Weight in kg
    pub weight: f64,
    pub date: NaiveDate,
}

/// Data collected by the signup/onboarding flow.
#[derive(Debug, Clone)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
    pub goal: GoalType,
    pub activity_level: String,
    /// Height in cm
    pub height: f64,
    /// Weight in kg
    pub weight: f64,
    /// Body fat percentage
    pub body_fat: f64,
}

/// The full per-user record, persisted as one JSON document per user.
///
/// The field layout matches the records written by the original web app, so
/// existing documents load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    /// Stored in plaintext for compatibility with existing records. This is
    /// a known weakness of the storage layout, not something to build on;
    /// see DESIGN.md before reusing it.
    pub password: String,
    #[serde(default)]
    pub goal: GoalType,
    pub activity_level: String,
    /// Height in cm
    pub height: f64,
    /// Weight in kg
    pub weight: f64,
    /// Body fat percentage
    pub body_fat: f64,
    pub level: u32,
    pub xp: u32,
    pub xp_total: u32,
    pub status: String,
    pub profile_pic: String,
    pub notifications: bool,
    pub biometrics: bool,
    pub unit_system: String,
    #[serde(default)]
    pub weight_history: Vec<WeightEntry>,
    pub target_weight: f64,
    #[serde(default)]
    pub meal_history: Vec<Meal>,
    #[serde(default)]
    pub food_database: Vec<FoodReference>,
    /// Completion ratio per weekday, Sunday first.
    #[serde(default)]
    pub consistency_data: [f64; 7],
    pub registration_date: NaiveDate,
    /// Water consumed today (ml)
    #[serde(default)]
    pub water_intake: f64,
    /// Daily water target (ml)
    pub water_goal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_water_reset: Option<DateTime<Utc>>,
    /// Calendar day the last daily reset ran for; absent on fresh accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_global_reset_date: Option<NaiveDate>,
}

impl Profile {
    /// Build a fresh profile with the signup defaults of the original app:
    /// level 1, empty meal history, 2500 ml water goal, today's weight as
    /// the first history point.
    pub fn new(signup: Signup, today: NaiveDate) -> Result<Self> {
        if signup.name.trim().is_empty() {
            return Err(Error::validation("name must not be empty"));
        }
        if signup.email.trim().is_empty() {
            return Err(Error::validation("email must not be empty"));
        }
        Ok(Profile {
            name: signup.name,
            email: signup.email.to_lowercase(),
            password: signup.password,
            goal: signup.goal,
            activity_level: signup.activity_level,
            height: signup.height,
            weight: signup.weight,
            body_fat: signup.body_fat,
            level: 1,
            xp: 0,
            xp_total: 100,
            status: "Iniciante".to_string(),
            profile_pic: String::new(),
            notifications: true,
            biometrics: false,
            unit_system: "Metric".to_string(),
            weight_history: vec![WeightEntry {
                label: "Hoje".to_string(),
                weight: signup.weight,
                date: today,
            }],
            target_weight: signup.weight,
            meal_history: Vec::new(),
            food_database: Vec::new(),
            consistency_data: [0.0; 7],
            registration_date: today,
            water_intake: 0.0,
            water_goal: 2500.0,
            last_water_reset: None,
            last_global_reset_date: None,
        })
    }

    /// Validate a record at the load boundary.
    ///
    /// Malformed stored data fails fast here instead of surfacing as odd
    /// numbers deep inside a calculation.
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(Error::validation("profile has no email"));
        }
        if self.water_intake < 0.0 {
            return Err(Error::validation("water intake is negative"));
        }
        for food in &self.food_database {
            if !food.nutrients.is_non_negative() {
                return Err(Error::validation(format!(
                    "food {} has negative nutrient values",
                    food.id
                )));
            }
        }
        for meal in &self.meal_history {
            if !meal.nutrients.is_non_negative() {
                return Err(Error::validation(format!(
                    "meal {} has negative nutrient values",
                    meal.id
                )));
            }
            for item in &meal.items {
                if !item.nutrients.is_non_negative() {
                    return Err(Error::validation(format!(
                        "line item {} has negative nutrient values",
                        item.id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Serde adapter for the "HH:mm" time format used by the persisted records.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
