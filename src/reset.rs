//! Day-boundary reset.
//!
//! Runs once at session start/resume, before anything reads meal statuses,
//! so yesterday's check-ins never leak into a new day.

use chrono::NaiveDate;

use crate::models::{MealStatus, Profile};

/// Reset the profile for a new calendar day, if the day has changed.
///
/// When `today` differs from the stored last-reset date (or no reset was
/// ever recorded), every meal goes back to pending, the water counter drops
/// to zero and the new date is stamped. Returns whether a reset happened;
/// calling it again on the same day is a no-op.
pub fn maybe_reset(profile: &mut Profile, today: NaiveDate) -> bool {
    if profile.last_global_reset_date == Some(today) {
        return false;
    }

    for meal in &mut profile.meal_history {
        meal.status = MealStatus::Pending;
        // Stamps belong to the previous day's check-ins
        meal.last_status_at = None;
    }
    profile.water_intake = 0.0;
    profile.last_global_reset_date = Some(today);
    tracing::info!(user = %profile.email, %today, "daily reset applied");
    true
}
