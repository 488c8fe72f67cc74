//! Workout generation
//!
//! Three-section workouts (warm-up, main, cool-down) and single-block
//! focus-area workouts.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, ExerciseTemplate};
use crate::models::{Equipment, FitnessLevel, FocusArea, WorkoutType};

use super::assembler::{
    FocusExercise, FocusWorkoutPlan, PlannedExercise, Section, SectionKind, WorkoutPlan,
};
use super::difficulty::DifficultyProfile;
use super::exclusion::{filter_excluded, normalize_keywords, ExclusionSet};
use super::fitter::{fit_time_budget, main_exercise_count, section_durations};
use super::selector::select;

/// Minutes of work per set in focus workouts, rest excluded
const FOCUS_MINUTES_PER_SET: f64 = 3.0;

/// Input for a three-section workout
#[derive(Debug, Clone)]
pub struct WorkoutRequest {
    pub workout_type: WorkoutType,
    pub duration_minutes: u32,
    pub level: FitnessLevel,
    /// Raw equipment keywords, e.g. "dumbbells" or "cable machine"
    pub equipment: Vec<String>,
    pub injuries: Vec<String>,
    /// Informational only
    pub goal: String,
}

/// Generate a warm-up, main and cool-down workout.
///
/// Randomness is drawn in section order (warm-up, main, cool-down), so a
/// seeded generator reproduces the same plan.
pub fn generate_workout<R: Rng + ?Sized>(
    catalog: &Catalog,
    request: &WorkoutRequest,
    rng: &mut R,
) -> WorkoutPlan {
    let injuries = normalize_keywords(&request.injuries);
    let durations = section_durations(request.duration_minutes);
    let rules = catalog.rules();

    let warmup_pool = filter_excluded(catalog.warmups(), &rules.warmup_injuries, &injuries);
    let warmup = fit_time_budget(&select(&warmup_pool, warmup_pool.len(), rng), durations.warmup);

    let main = main_section(catalog, request, &injuries, durations.main, rng);

    let cooldown_pool = filter_excluded(catalog.cooldowns(), &rules.cooldown_injuries, &injuries);
    let cooldown = fit_time_budget(
        &select(&cooldown_pool, cooldown_pool.len(), rng),
        durations.cooldown,
    );

    let plan = WorkoutPlan::assemble(
        Section::new(SectionKind::Warmup, durations.warmup, warmup),
        Section::new(SectionKind::Main, durations.main, main),
        Section::new(SectionKind::Cooldown, durations.cooldown, cooldown),
    );

    info!(
        workout_type = request.workout_type.as_str(),
        level = request.level.as_str(),
        minutes = plan.total_duration(),
        main_exercises = plan.main().exercises().len(),
        goal = %request.goal,
        "generated workout"
    );

    plan
}

fn main_section<R: Rng + ?Sized>(
    catalog: &Catalog,
    request: &WorkoutRequest,
    injuries: &[String],
    budget_minutes: u32,
    rng: &mut R,
) -> Vec<PlannedExercise> {
    let rules = &catalog.rules().main_injuries;
    let library = catalog.workout_library(request.workout_type);

    let mut pool = filter_excluded(library, rules, injuries);
    if request.workout_type == WorkoutType::Gym && !request.equipment.is_empty() {
        let declared = parse_equipment(&request.equipment);
        debug!(
            declared = ?declared.iter().map(Equipment::as_str).collect::<Vec<_>>(),
            "gym equipment declared"
        );
        pool.retain(|e| !e.equipment.needs_declaration_at_gym() || declared.contains(&e.equipment));
    }
    debug!(library = library.len(), kept = pool.len(), "filtered main-section library");

    if pool.is_empty() {
        pool = safe_default(catalog, rules, injuries);
    }

    let profile = DifficultyProfile::for_level(request.level);
    select(&pool, main_exercise_count(budget_minutes), rng)
        .into_iter()
        .map(|template| profile.scale(template))
        .collect()
}

/// Beginner full-body, equipment-free exercises, injury-filtered when that
/// leaves anything
fn safe_default<'a>(
    catalog: &'a Catalog,
    rules: &ExclusionSet,
    injuries: &[String],
) -> Vec<&'a ExerciseTemplate> {
    let safe = catalog.safe_default();
    let filtered = filter_excluded(safe.iter().copied(), rules, injuries);
    if filtered.is_empty() {
        warn!(injuries = ?injuries, "safe default conflicts with every injury, using it unfiltered");
        return safe;
    }
    warn!(kept = filtered.len(), "no library exercises left, using the safe default");
    filtered
}

/// Known equipment tags among the caller's keywords; unknown words are ignored
fn parse_equipment(raw: &[String]) -> Vec<Equipment> {
    raw.iter().filter_map(|word| Equipment::from_keyword(word)).collect()
}

/// Input for a focus-area workout
#[derive(Debug, Clone)]
pub struct FocusWorkoutRequest {
    /// Gym or home
    pub workout_type: WorkoutType,
    pub focus_area: FocusArea,
    pub level: FitnessLevel,
    pub duration_minutes: u32,
    pub equipment: Vec<String>,
    pub injuries: Vec<String>,
}

/// Build a single-block workout for one body region.
///
/// Exercises are taken in catalog order, so the result does not depend on
/// randomness.
pub fn generate_focus_workout(catalog: &Catalog, request: &FocusWorkoutRequest) -> FocusWorkoutPlan {
    let injuries = normalize_keywords(&request.injuries);
    let rules = &catalog.rules().focus_injuries;
    let library = catalog.focus_library(request.level, request.focus_area);

    let mut pool: Vec<&ExerciseTemplate> = library.iter().collect();
    if request.workout_type == WorkoutType::Home {
        let declared = parse_equipment(&request.equipment);
        pool.retain(|e| e.equipment.is_home_default() || declared.contains(&e.equipment));
    }
    let mut pool = filter_excluded(pool, rules, &injuries);
    if pool.is_empty() {
        pool = safe_default(catalog, rules, &injuries);
    }

    let profile = DifficultyProfile::for_level(request.level);
    let needed = focus_exercise_count(request.duration_minutes, &profile);

    let exercises: Vec<FocusExercise> = pool
        .into_iter()
        .take(needed)
        .map(|template| {
            let is_plank = template.name.to_lowercase().contains("plank");
            let reps = if request.focus_area == FocusArea::Core && is_plank {
                profile.plank_hold()
            } else {
                profile.rep_range()
            };
            FocusExercise {
                name: template.name.clone(),
                sets: profile.focus_sets,
                reps,
                rest_time: profile.focus_rest_seconds,
                tips: template.instructions.clone(),
            }
        })
        .collect();

    let plan = FocusWorkoutPlan::assemble(
        request.workout_type,
        request.focus_area,
        request.level,
        request.duration_minutes,
        exercises,
    );

    info!(
        workout = plan.workout_name(),
        exercises = plan.exercises().len(),
        "generated focus workout"
    );

    plan
}

/// `ceil(floor(duration / (3 + rest/60)) / sets)`
fn focus_exercise_count(duration_minutes: u32, profile: &DifficultyProfile) -> usize {
    let minutes_per_set = FOCUS_MINUTES_PER_SET + f64::from(profile.focus_rest_seconds) / 60.0;
    let total_sets = (f64::from(duration_minutes) / minutes_per_set).floor();
    (total_sets / f64::from(profile.focus_sets)).ceil() as usize
}
