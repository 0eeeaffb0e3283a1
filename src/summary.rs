//! Day-level aggregation over the meal ledger.
//!
//! Only meals checked in as completed count toward the day's consumption;
//! pending and failed meals contribute nothing.

use crate::error::{Error, Result};
use crate::models::{GoalType, Meal, MealStatus, Nutrients};

/// Fixed macro targets shown on the dashboard, keyed off the dietary goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroGoals {
    /// Protein target (g)
    pub protein: f64,
    /// Carb target (g)
    pub carbs: f64,
    /// Fat target (g)
    pub fat: f64,
}

/// Sum nutrients over completed meals, in ledger order.
pub fn consumed_totals(meals: &[Meal]) -> Nutrients {
    let mut total = Nutrients::default();
    for meal in meals {
        if meal.status == MealStatus::Completed {
            total.add(&meal.nutrients);
        }
    }
    total
}

/// Daily calorie target for a dietary goal.
///
/// These are fixed defaults rather than values derived from biometrics;
/// see DESIGN.md for the open question on generalizing them.
pub fn calorie_goal(goal: GoalType) -> u32 {
    match goal {
        GoalType::Bulking => 3000,
        GoalType::Cutting => 2000,
        GoalType::Maintenance => 2400,
    }
}

/// Daily macro targets for a dietary goal, as shown on the dashboard.
pub fn macro_goals(goal: GoalType) -> MacroGoals {
    match goal {
        GoalType::Bulking => MacroGoals {
            protein: 200.0,
            carbs: 400.0,
            fat: 70.0,
        },
        _ => MacroGoals {
            protein: 180.0,
            carbs: 250.0,
            fat: 70.0,
        },
    }
}

/// Percentage of the calorie goal consumed, clamped to 0..=100.
pub fn goal_percentage(consumed_calories: f64, goal_calories: f64) -> Result<u8> {
    if goal_calories <= 0.0 {
        return Err(Error::invalid_argument(format!(
            "calorie goal must be positive, got {goal_calories}"
        )));
    }
    let pct = (consumed_calories / goal_calories * 100.0).round();
    Ok(pct.clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn meal(status: MealStatus, calories: f64) -> Meal {
        Meal {
            id: format!("meal-{calories}"),
            name: "Refeição".to_string(),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            nutrients: Nutrients {
                calories,
                protein: 10.0,
                carbs: 20.0,
                fat: 5.0,
            },
            status,
            last_status_at: None,
            items: Vec::new(),
        }
    }

    #[test]
    fn only_completed_meals_count() {
        let meals = vec![
            meal(MealStatus::Completed, 400.0),
            meal(MealStatus::Completed, 600.0),
            meal(MealStatus::Pending, 300.0),
            meal(MealStatus::Failed, 500.0),
        ];
        let totals = consumed_totals(&meals);
        assert_eq!(totals.calories, 1000.0);
        assert_eq!(totals.protein, 20.0);
    }

    #[test]
    fn unchecking_a_meal_removes_its_contribution() {
        let mut meals = vec![meal(MealStatus::Completed, 400.0)];
        assert_eq!(consumed_totals(&meals).calories, 400.0);
        meals[0].status = MealStatus::Failed;
        assert_eq!(consumed_totals(&meals).calories, 0.0);
    }

    #[test]
    fn calorie_goals_follow_the_goal_type() {
        assert_eq!(calorie_goal(GoalType::Bulking), 3000);
        assert_eq!(calorie_goal(GoalType::Cutting), 2000);
        assert_eq!(calorie_goal(GoalType::Maintenance), 2400);
    }

    #[test]
    fn percentage_rounds_and_caps_at_100() {
        assert_eq!(goal_percentage(1000.0, 2000.0).unwrap(), 50);
        assert_eq!(goal_percentage(1234.0, 2400.0).unwrap(), 51);
        assert_eq!(goal_percentage(5000.0, 2000.0).unwrap(), 100);
    }

    #[test]
    fn non_positive_goal_is_rejected() {
        assert!(goal_percentage(100.0, 0.0).is_err());
        assert!(goal_percentage(100.0, -10.0).is_err());
    }
}
