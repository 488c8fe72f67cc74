//! Plan generation tools
//!
//! Runs the engine for validated requests and optionally stores the result
//! for a user.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::db::Database;
use crate::models::{PlanKind, SavedPlan, SavedPlanCreate};
use crate::planner::{
    self, DayMealPlan, DayPlanRequest, FocusWorkoutPlan, FocusWorkoutRequest, MealPlan, MealRequest,
    WorkoutPlan, WorkoutRequest,
};

// ============================================================================
// Response Structs
// ============================================================================

/// A generated plan, plus its saved id when it was persisted
#[derive(Debug, Serialize)]
pub struct GeneratedPlan<T> {
    pub plan: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_plan_id: Option<i64>,
}

// ============================================================================
// Helpers
// ============================================================================

/// Run one generation with the shared generator locked. A poisoned lock is
/// recovered; the generator holds no invariant a panic could break.
fn with_rng<T>(rng: &Mutex<StdRng>, generate: impl FnOnce(&mut StdRng) -> T) -> T {
    let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
    generate(&mut guard)
}

fn save<T: Serialize>(
    db: &Database,
    user_id: Option<i64>,
    kind: PlanKind,
    label: &str,
    plan: &T,
) -> Result<Option<i64>, String> {
    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let plan = serde_json::to_value(plan).map_err(|e| format!("Serialization error: {}", e))?;
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let saved = SavedPlan::create(
        &conn,
        &SavedPlanCreate {
            user_id,
            plan_kind: kind,
            label: label.to_string(),
            plan_date: None,
            plan,
        },
    )
    .map_err(|e| format!("Failed to save plan: {}", e))?;

    info!(id = saved.id, user_id, kind = kind.as_str(), "saved plan");
    Ok(Some(saved.id))
}

// ============================================================================
// Plan Tool Functions
// ============================================================================

/// Generate one meal scaled toward the calorie target
pub fn generate_meal(
    catalog: &Catalog,
    db: &Database,
    rng: &Mutex<StdRng>,
    request: &MealRequest,
    user_id: Option<i64>,
) -> Result<GeneratedPlan<MealPlan>, String> {
    let plan = with_rng(rng, |rng| planner::generate_meal(catalog, request, rng))
        .ok_or_else(|| format!("No meal templates for {}", request.meal_time.as_str()))?;

    let label = plan.name().to_string();
    let saved_plan_id = save(db, user_id, PlanKind::Meal, &label, &plan)?;
    Ok(GeneratedPlan { plan, saved_plan_id })
}

/// Generate a three-section workout
pub fn generate_workout(
    catalog: &Catalog,
    db: &Database,
    rng: &Mutex<StdRng>,
    request: &WorkoutRequest,
    user_id: Option<i64>,
) -> Result<GeneratedPlan<WorkoutPlan>, String> {
    let plan = with_rng(rng, |rng| planner::generate_workout(catalog, request, rng));

    let label = format!(
        "{} {} workout ({} min)",
        request.level.display_name(),
        request.workout_type.display_name(),
        plan.total_duration()
    );
    let saved_plan_id = save(db, user_id, PlanKind::Workout, &label, &plan)?;
    Ok(GeneratedPlan { plan, saved_plan_id })
}

/// Generate unscaled meals for a day or a single meal time
pub fn generate_day_meal_plan(
    catalog: &Catalog,
    db: &Database,
    rng: &Mutex<StdRng>,
    request: &DayPlanRequest,
    user_id: Option<i64>,
) -> Result<GeneratedPlan<DayMealPlan>, String> {
    let plan = with_rng(rng, |rng| planner::generate_day_plan(catalog, request, rng));

    let label = match request.meal_time {
        Some(time) => format!("{} meal plan", time.as_str()),
        None => "Day meal plan".to_string(),
    };
    let saved_plan_id = save(db, user_id, PlanKind::DayMealPlan, &label, &plan)?;
    Ok(GeneratedPlan { plan, saved_plan_id })
}

/// Generate a focus-area workout
pub fn generate_focus_workout(
    catalog: &Catalog,
    db: &Database,
    request: &FocusWorkoutRequest,
    user_id: Option<i64>,
) -> Result<GeneratedPlan<FocusWorkoutPlan>, String> {
    let plan = planner::generate_focus_workout(catalog, request);

    let label = plan.workout_name().to_string();
    let saved_plan_id = save(db, user_id, PlanKind::FocusWorkout, &label, &plan)?;
    Ok(GeneratedPlan { plan, saved_plan_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitnessLevel, Macros, MealTime, WorkoutType};
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Database, Catalog, Mutex<StdRng>) {
        let dir = TempDir::new().unwrap();
        let db = Database::open_and_migrate(dir.path().join("plans.db")).unwrap();
        let catalog = Catalog::builtin().unwrap();
        (dir, db, catalog, Mutex::new(StdRng::seed_from_u64(17)))
    }

    #[test]
    fn test_meal_not_saved_without_user() {
        let (_dir, db, catalog, rng) = setup();
        let request = MealRequest {
            meal_time: MealTime::Breakfast,
            target: Macros::new(450.0, 25.0, 50.0, 15.0),
            allergies: Vec::new(),
            goal: "maintenance".to_string(),
        };
        let result = generate_meal(&catalog, &db, &rng, &request, None).unwrap();
        assert!(result.saved_plan_id.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("saved_plan_id").is_none());
        assert!(json["plan"]["totalMacros"]["calories"].is_number());
    }

    #[test]
    fn test_workout_saved_and_round_trips() {
        let (_dir, db, catalog, rng) = setup();
        let request = WorkoutRequest {
            workout_type: WorkoutType::Home,
            duration_minutes: 45,
            level: FitnessLevel::Beginner,
            equipment: Vec::new(),
            injuries: vec!["knee".to_string()],
            goal: "weight loss".to_string(),
        };
        let result = generate_workout(&catalog, &db, &rng, &request, Some(5)).unwrap();
        let id = result.saved_plan_id.unwrap();

        let conn = db.get_conn().unwrap();
        let saved = SavedPlan::get_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(saved.user_id, 5);
        assert_eq!(saved.plan_kind, PlanKind::Workout);
        assert_eq!(saved.label, "Beginner Home workout (45 min)");
        assert_eq!(saved.plan, serde_json::to_value(&result.plan).unwrap());
    }

    #[test]
    fn test_recovers_poisoned_generator() {
        let (_dir, db, catalog, rng) = setup();
        let _ = std::panic::catch_unwind(|| {
            let _guard = rng.lock().unwrap();
            panic!("poison");
        });
        assert!(rng.is_poisoned());

        let result = generate_day_meal_plan(&catalog, &db, &rng, &DayPlanRequest::default(), None).unwrap();
        assert_eq!(result.plan.meals().len(), 5);
    }
}
