//! Plan assembler
//!
//! Final plan structures. Every aggregate is computed here from the plan's
//! own item list; the fields are private so no caller can supply a total.

use serde::Serialize;

use crate::catalog::MicroExercise;
use crate::models::{FitnessLevel, FocusArea, Intensity, Macros, MealTime, Reps, WorkoutType};

// ============================================================================
// Meals
// ============================================================================

/// One resolved meal item with its final nutrition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMealItem {
    pub name: String,
    pub quantity: String,
    #[serde(flatten)]
    pub macros: Macros,
}

/// A generated meal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    name: String,
    meal_time: MealTime,
    items: Vec<PlannedMealItem>,
    total_macros: Macros,
    instructions: String,
    alternatives: String,
    allergy_fallback: bool,
}

impl MealPlan {
    pub fn assemble(
        name: String,
        meal_time: MealTime,
        items: Vec<PlannedMealItem>,
        instructions: String,
        alternatives: String,
        allergy_fallback: bool,
    ) -> Self {
        let total_macros = items.iter().map(|item| item.macros).sum();
        Self {
            name,
            meal_time,
            items,
            total_macros,
            instructions,
            alternatives,
            allergy_fallback,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meal_time(&self) -> MealTime {
        self.meal_time
    }

    pub fn items(&self) -> &[PlannedMealItem] {
        &self.items
    }

    pub fn total_macros(&self) -> Macros {
        self.total_macros
    }

    /// The allergy filter excluded every template for this meal time, so the
    /// meal was drawn from the unfiltered list and may contain an allergen
    pub fn allergy_fallback(&self) -> bool {
        self.allergy_fallback
    }
}

/// A whole day of unscaled meals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMealPlan {
    meals: Vec<MealPlan>,
    total_nutrition: Macros,
}

impl DayMealPlan {
    pub fn assemble(meals: Vec<MealPlan>) -> Self {
        let total_nutrition = meals.iter().map(MealPlan::total_macros).sum();
        Self {
            meals,
            total_nutrition,
        }
    }

    pub fn meals(&self) -> &[MealPlan] {
        &self.meals
    }

    pub fn total_nutrition(&self) -> Macros {
        self.total_nutrition
    }
}

// ============================================================================
// Workouts
// ============================================================================

/// One resolved exercise with its final prescription
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedExercise {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<Reps>,
    /// Seconds for warm-up and cool-down items, minutes for timed main-section work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub rest_seconds: u32,
    pub instructions: String,
    pub difficulty: Intensity,
}

impl PlannedExercise {
    /// A warm-up or cool-down movement: duration in seconds, no rest
    pub fn timed(micro: &MicroExercise) -> Self {
        Self {
            name: micro.name.clone(),
            sets: None,
            reps: None,
            duration: Some(micro.minutes * 60),
            rest_seconds: 0,
            instructions: micro.instructions.clone(),
            difficulty: micro.intensity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Warmup,
    Main,
    Cooldown,
}

/// A duration-bounded group of exercises
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    #[serde(rename = "type")]
    kind: SectionKind,
    /// Minutes
    duration: u32,
    exercises: Vec<PlannedExercise>,
}

impl Section {
    pub fn new(kind: SectionKind, duration: u32, exercises: Vec<PlannedExercise>) -> Self {
        Self {
            kind,
            duration,
            exercises,
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn exercises(&self) -> &[PlannedExercise] {
        &self.exercises
    }
}

/// A generated three-section workout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    warmup: Section,
    main: Section,
    cooldown: Section,
    total_duration: u32,
}

impl WorkoutPlan {
    pub fn assemble(warmup: Section, main: Section, cooldown: Section) -> Self {
        let total_duration = warmup.duration + main.duration + cooldown.duration;
        Self {
            warmup,
            main,
            cooldown,
            total_duration,
        }
    }

    pub fn warmup(&self) -> &Section {
        &self.warmup
    }

    pub fn main(&self) -> &Section {
        &self.main
    }

    pub fn cooldown(&self) -> &Section {
        &self.cooldown
    }

    pub fn sections(&self) -> [&Section; 3] {
        [&self.warmup, &self.main, &self.cooldown]
    }

    pub fn total_duration(&self) -> u32 {
        self.total_duration
    }
}

/// One exercise of a focus-area workout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusExercise {
    pub name: String,
    pub sets: u32,
    /// Rep range such as "10-12", or a hold such as "45 seconds"
    pub reps: Reps,
    pub rest_time: u32,
    pub tips: String,
}

/// A generated single-block focus-area workout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusWorkoutPlan {
    workout_name: String,
    workout_type: WorkoutType,
    focus_area: FocusArea,
    difficulty: FitnessLevel,
    duration: u32,
    exercises: Vec<FocusExercise>,
}

impl FocusWorkoutPlan {
    pub fn assemble(
        workout_type: WorkoutType,
        focus_area: FocusArea,
        difficulty: FitnessLevel,
        duration: u32,
        exercises: Vec<FocusExercise>,
    ) -> Self {
        let place = if workout_type == WorkoutType::Gym { "Gym" } else { "Home" };
        let workout_name = format!(
            "{} {} {} Workout",
            difficulty.display_name(),
            focus_area.display_name(),
            place
        );
        Self {
            workout_name,
            workout_type,
            focus_area,
            difficulty,
            duration,
            exercises,
        }
    }

    pub fn workout_name(&self) -> &str {
        &self.workout_name
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.workout_type
    }

    pub fn focus_area(&self) -> FocusArea {
        self.focus_area
    }

    pub fn difficulty(&self) -> FitnessLevel {
        self.difficulty
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn exercises(&self) -> &[FocusExercise] {
        &self.exercises
    }
}
