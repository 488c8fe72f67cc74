//! FitPlan Status Tool
//!
//! Runtime status of the service and the usage guide for AI assistants.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::catalog::{Catalog, CatalogSummary};

/// Plan generation instructions for AI assistants
pub const PLAN_INSTRUCTIONS: &str = r#"
# FitPlan Instructions

FitPlan generates vegetarian meals and workouts from a curated catalog. Plans are
approximations: totals are always computed from the returned items, never copied
from your targets.

---

## Meals

**Tool:** `generate_meal`
- `meal_time`: breakfast | lunch | dinner | snack
- `calories`, `protein`, `carbs`, `fats`: positive targets for this one meal
- `allergies`: comma-separated, e.g. `"dairy, peanut"`
- `goal`: required label, informational only

How the target is applied:
- All items are scaled by one factor, `calories / template calories`, clamped to 0.5-2.0.
  A 350 kcal template asked for 2200 kcal comes back at 700 kcal.
- If protein is still more than 5 g short, one protein boost item is added
  (Greek yogurt for breakfast/snack, paneer cubes otherwise).

**Allergy fallback:** if every template for the meal time contains an allergen, the
meal is drawn from the unfiltered list and `allergyFallback` is `true`. Tell the user
or ask for a different meal time.

**Tool:** `generate_day_meal_plan`
- Breakfast, lunch, dinner and two snacks at baseline portions, or one `meal_time` only.
- No allergy fallback here: a slot with no safe template is left out.

---

## Workouts

**Tool:** `generate_workout`
- `workout_type`: gym | home | cardio | strength
- `duration`: 15-180 minutes
- `fitness_level`: beginner | intermediate | advanced
- `equipment`: comma-separated; for gym plans, barbell, dumbbell and cable work is only
  used when listed (e.g. `"barbell, dumbbells, cable machine"`)
- `injuries`: comma-separated: knee, shoulder, back, wrist
- `goal`: required label, informational only

Structure:
- Warm-up and cool-down each get 15% of the time (at most 10 min). Their item
  durations are in **seconds**.
- Main section: 5-8 exercises. Timed main-section work has `duration` in **minutes**.
- `totalDuration` always equals the requested duration.

**Tool:** `generate_focus_workout`
- `workout_type`: gym | home (default home)
- `focus_area`: full_body | upper | lower | core (default full_body)
- `difficulty`: beginner | intermediate | advanced (default beginner)
- `duration`: 10-180 minutes (default 30)
- `equipment_available`: list of extra equipment for home workouts
- `injuries`: comma-separated

---

## Saving Plans

Pass `user_id` to any generate tool to store the plan. The response then carries
`saved_plan_id`.

- `list_saved_plans` (user_id, optional plan_kind: meal | workout | day_meal_plan | focus_workout)
- `get_saved_plan` (id)
- `delete_saved_plan` (id)

---

## Errors

Invalid parameters are rejected with a code, e.g. `INVALID_DURATION: duration must be
between 15 and 180 minutes (got 200)`.
"#;

/// Runtime status of the FitPlan service
#[derive(Debug, Clone, Serialize)]
pub struct FitplanStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Database information
    pub database_path: String,
    pub database_size_bytes: Option<u64>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// Sampling
    pub seeded: bool,
    pub catalog: CatalogSummary,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
    seeded: bool,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf, seeded: bool) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
            seeded,
        }
    }

    /// Get the current status
    pub fn get_status(&self, catalog: &Catalog) -> FitplanStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitplanStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            seeded: self.seeded,
            catalog: catalog.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_missing_database() {
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/fitplan.db"), true);
        let status = tracker.get_status(&Catalog::builtin().unwrap());
        assert!(status.database_size_bytes.is_none());
        assert!(status.seeded);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.catalog.warmups, 10);
    }
}
