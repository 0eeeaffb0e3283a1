use chrono::{Local, NaiveDate, NaiveTime, TimeZone};
use metanutri_core::store::{MemoryStore, ProfileStore};
use metanutri_core::{
    catalog, ledger, reset, serving, summary, Error, GoalType, MealStatus, Nutrients, Profile,
    ServingUnit, Signup,
};

fn signup_profile() -> Profile {
    Profile::new(
        Signup {
            name: "Carlos".to_string(),
            email: "carlos@example.com".to_string(),
            password: "hunter2".to_string(),
            goal: GoalType::Cutting,
            activity_level: "Active".to_string(),
            height: 178.0,
            weight: 82.0,
            body_fat: 18.0,
        },
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
    .unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn lunch_from_catalog_scales_and_aggregates() {
    let mut profile = signup_profile();

    let meal = ledger::create_meal(&mut profile, "Almoço", time(12, 0)).unwrap();

    let hits = catalog::search(&profile, "frango");
    assert_eq!(hits.len(), 1);
    let chicken = &hits[0];
    assert_eq!(
        chicken.nutrients,
        Nutrients {
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
        }
    );

    let scaled = serving::scale(chicken, 150.0, ServingUnit::Grams).unwrap();
    assert_eq!(scaled.calories, 248.0);
    assert_eq!(scaled.protein, 46.5);
    assert_eq!(scaled.carbs, 0.0);
    assert_eq!(scaled.fat, 5.4);

    let meal = ledger::add_line_item(
        &mut profile,
        &meal.id,
        &chicken.name,
        150.0,
        ServingUnit::Grams,
        scaled,
    )
    .unwrap();

    assert_eq!(meal.items.len(), 1);
    assert_eq!(meal.items[0].nutrients, scaled);
    assert_eq!(meal.nutrients, scaled);
}

#[test]
fn daily_totals_count_completed_meals_only() {
    let mut profile = signup_profile();
    let now = Local.with_ymd_and_hms(2024, 1, 1, 21, 0, 0).unwrap();

    for (name, t, calories, status) in [
        ("Café", time(8, 0), 400.0, Some(MealStatus::Completed)),
        ("Almoço", time(12, 0), 600.0, Some(MealStatus::Completed)),
        ("Jantar", time(19, 0), 300.0, None),
    ] {
        let meal = ledger::create_meal(&mut profile, name, t).unwrap();
        ledger::add_line_item(
            &mut profile,
            &meal.id,
            "Prato",
            100.0,
            ServingUnit::Grams,
            Nutrients {
                calories,
                protein: 0.0,
                carbs: 0.0,
                fat: 0.0,
            },
        )
        .unwrap();
        if let Some(status) = status {
            ledger::set_status(&mut profile, &meal.id, status, now).unwrap();
        }
    }

    let totals = summary::consumed_totals(&profile.meal_history);
    assert_eq!(totals.calories, 1000.0);

    let pct = summary::goal_percentage(totals.calories, 2000.0).unwrap();
    assert_eq!(pct, 50);
    assert_eq!(summary::calorie_goal(profile.goal), 2000);
}

#[test]
fn new_day_resets_meals_and_water() {
    let mut profile = signup_profile();
    profile.last_global_reset_date = Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    profile.water_intake = 1500.0;

    let meal = ledger::create_meal(&mut profile, "Café", time(8, 0)).unwrap();
    ledger::set_status(
        &mut profile,
        &meal.id,
        MealStatus::Completed,
        Local.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap(),
    )
    .unwrap();

    let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    assert!(reset::maybe_reset(&mut profile, today));
    assert_eq!(profile.meal_history[0].status, MealStatus::Pending);
    assert_eq!(profile.water_intake, 0.0);
    assert_eq!(profile.last_global_reset_date, Some(today));

    // Second run on the same day must change nothing
    let snapshot = profile.clone();
    assert!(!reset::maybe_reset(&mut profile, today));
    assert_eq!(profile, snapshot);
}

#[test]
fn empty_food_name_adds_nothing() {
    let mut profile = signup_profile();
    let err = catalog::add_user_food(
        &mut profile,
        catalog::NewFood {
            name: String::new(),
            nutrients: Nutrients::default(),
            unit: ServingUnit::Grams,
            grams_per_unit: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(profile.food_database.is_empty());
}

#[test]
fn session_flow_with_persistence() {
    let mut store = MemoryStore::new();
    let mut profile = signup_profile();
    store.save(&profile.email, &profile).unwrap();

    // Session start: load, run the day-boundary check before anything else
    let mut profile = store.load("carlos@example.com").unwrap().unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    assert!(reset::maybe_reset(&mut profile, today));
    store.save(&profile.email, &profile).unwrap();

    // Log a custom food into a meal
    let food = catalog::add_user_food(
        &mut profile,
        catalog::NewFood {
            name: "Tapioca".to_string(),
            nutrients: Nutrients {
                calories: 240.0,
                protein: 0.0,
                carbs: 60.0,
                fat: 0.0,
            },
            unit: ServingUnit::Grams,
            grams_per_unit: None,
        },
    )
    .unwrap();

    let meal = ledger::create_meal(&mut profile, "Café", time(7, 30)).unwrap();
    let scaled = serving::scale(&food, 50.0, ServingUnit::Grams).unwrap();
    ledger::add_line_item(
        &mut profile,
        &meal.id,
        &food.name,
        50.0,
        ServingUnit::Grams,
        scaled,
    )
    .unwrap();
    ledger::set_status(
        &mut profile,
        &meal.id,
        MealStatus::Completed,
        Local.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap(),
    )
    .unwrap();
    ledger::add_water(&mut profile, 300.0).unwrap();
    store.save(&profile.email, &profile).unwrap();

    // Next session, same day: nothing resets, state is intact
    let mut profile = store.load(&profile.email).unwrap().unwrap();
    assert!(!reset::maybe_reset(&mut profile, today));
    assert_eq!(profile.water_intake, 300.0);
    assert_eq!(profile.meal_history[0].status, MealStatus::Completed);
    assert_eq!(
        summary::consumed_totals(&profile.meal_history).calories,
        120.0
    );
}

#[test]
fn persisted_layout_matches_original_records() {
    let profile = signup_profile();
    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(json["email"], "carlos@example.com");
    assert_eq!(json["goal"], "Cutting");
    assert_eq!(json["activityLevel"], "Active");
    assert_eq!(json["waterGoal"], 2500.0);
    assert_eq!(json["unitSystem"], "Metric");
    assert_eq!(json["weightHistory"][0]["weight"], 82.0);
    assert!(json.get("lastGlobalResetDate").is_none());
}
