//! Data models
//!
//! Domain enums, shared macro values, and the saved plan database entity.

mod macros;
mod meal;
mod saved_plan;
mod workout;

pub use macros::Macros;
pub use meal::MealTime;
pub use saved_plan::{PlanKind, SavedPlan, SavedPlanCreate};
pub use workout::{Equipment, FitnessLevel, FocusArea, Intensity, Reps, WorkoutType};
