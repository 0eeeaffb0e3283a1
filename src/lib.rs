//! Core domain logic for the MetaNutri nutrition tracker.
//!
//! This crate owns the rules the UI shell calls into: the food catalog
//! ([`catalog`]), portion scaling ([`serving`]), the meal ledger with its
//! check-in state machine ([`ledger`]), day-level aggregation ([`summary`])
//! and the day-boundary reset ([`reset`]). Everything operates on a
//! [`models::Profile`] value; persistence goes through [`store`].
//!
//! All operations are synchronous and in-memory. The caller persists the
//! profile after each mutation; see [`store::ProfileStore`].

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reset;
pub mod serving;
pub mod store;
pub mod summary;

mod ids;

pub use error::{Error, Result};
pub use models::{
    FoodLineItem, FoodReference, GoalType, Meal, MealStatus, Nutrients, Profile, ServingUnit,
    Signup, WeightEntry,
};
