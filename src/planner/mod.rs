//! Plan generation engine
//!
//! Pure, synchronous generators over an injected [`Catalog`](crate::catalog::Catalog).
//! Randomness comes from a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces the same plan.

pub mod assembler;
pub mod difficulty;
pub mod exclusion;
pub mod fitter;
pub mod macro_scaler;
pub mod meal;
pub mod selector;
pub mod workout;

pub use assembler::{
    DayMealPlan, FocusExercise, FocusWorkoutPlan, MealPlan, PlannedExercise, PlannedMealItem,
    Section, SectionKind, WorkoutPlan,
};
pub use meal::{generate_day_plan, generate_meal, DayPlanRequest, MealRequest};
pub use workout::{generate_focus_workout, generate_workout, FocusWorkoutRequest, WorkoutRequest};
