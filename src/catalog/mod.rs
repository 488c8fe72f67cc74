//! Template catalog
//!
//! The read-only library of meal and exercise templates the planner draws
//! from. A catalog is built once at startup and shared by reference; nothing
//! in the planner mutates it.

mod builtin;

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::models::{Equipment, FitnessLevel, FocusArea, Intensity, Macros, MealTime, Reps, WorkoutType};
use crate::planner::exclusion::ExclusionSet;

pub use builtin::builtin_data;

/// One named component of a meal template
#[derive(Debug, Clone, PartialEq)]
pub struct MealItemTemplate {
    pub name: String,
    pub quantity: String,
    pub macros: Macros,
}

/// A meal template with its baseline item nutrition
#[derive(Debug, Clone, PartialEq)]
pub struct MealTemplate {
    pub name: String,
    pub items: Vec<MealItemTemplate>,
    pub instructions: String,
    pub alternatives: String,
}

/// A main-section exercise with its baseline prescription
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseTemplate {
    pub name: String,
    pub sets: Option<u32>,
    pub reps: Option<Reps>,
    /// Work duration in minutes, for timed exercises
    pub duration_minutes: Option<u32>,
    pub rest_seconds: Option<u32>,
    pub equipment: Equipment,
    pub instructions: String,
    pub intensity: Intensity,
}

/// A short warm-up or cool-down movement with a fixed length in minutes
#[derive(Debug, Clone, PartialEq)]
pub struct MicroExercise {
    pub name: String,
    pub minutes: u32,
    pub instructions: String,
    pub intensity: Intensity,
}

/// Keyword rule tables used by the exclusion filter
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    pub allergies: ExclusionSet,
    pub warmup_injuries: ExclusionSet,
    pub cooldown_injuries: ExclusionSet,
    pub main_injuries: ExclusionSet,
    pub focus_injuries: ExclusionSet,
}

/// Raw catalog contents, validated by [`Catalog::new`]
#[derive(Debug, Clone, Default)]
pub struct CatalogData {
    pub meals: BTreeMap<MealTime, Vec<MealTemplate>>,
    pub workouts: BTreeMap<WorkoutType, Vec<ExerciseTemplate>>,
    pub focus: BTreeMap<(FitnessLevel, FocusArea), Vec<ExerciseTemplate>>,
    pub warmups: Vec<MicroExercise>,
    pub cooldowns: Vec<MicroExercise>,
    pub rules: ExclusionRules,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no meal templates for {0}")]
    EmptyMealTime(&'static str),

    #[error("no exercises in the {0} library")]
    EmptyWorkoutLibrary(&'static str),

    #[error("beginner full-body library has no equipment-free exercises")]
    EmptySafeDefault,
}

/// Validated, immutable template catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
}

/// Template counts per category
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub meal_templates: BTreeMap<&'static str, usize>,
    pub workout_exercises: BTreeMap<&'static str, usize>,
    pub focus_exercises: usize,
    pub warmups: usize,
    pub cooldowns: usize,
    pub allergy_keywords: Vec<String>,
    pub injury_keywords: Vec<String>,
}

impl Catalog {
    /// Validate catalog contents. Every meal time and workout type needs at
    /// least one template, and the safe default pool must not be empty.
    pub fn new(data: CatalogData) -> Result<Self, CatalogError> {
        for time in MealTime::ALL {
            if data.meals.get(&time).map_or(true, |t| t.is_empty()) {
                return Err(CatalogError::EmptyMealTime(time.as_str()));
            }
        }

        for workout_type in WorkoutType::ALL {
            if data.workouts.get(&workout_type).map_or(true, |l| l.is_empty()) {
                return Err(CatalogError::EmptyWorkoutLibrary(workout_type.as_str()));
            }
        }

        let catalog = Self { data };
        if catalog.safe_default().is_empty() {
            return Err(CatalogError::EmptySafeDefault);
        }

        Ok(catalog)
    }

    /// The catalog that ships with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_data())
    }

    pub fn meal_templates(&self, meal_time: MealTime) -> &[MealTemplate] {
        self.data.meals.get(&meal_time).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn workout_library(&self, workout_type: WorkoutType) -> &[ExerciseTemplate] {
        self.data
            .workouts
            .get(&workout_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn focus_library(&self, level: FitnessLevel, focus: FocusArea) -> &[ExerciseTemplate] {
        self.data
            .focus
            .get(&(level, focus))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Beginner full-body exercises that need no equipment
    pub fn safe_default(&self) -> Vec<&ExerciseTemplate> {
        self.focus_library(FitnessLevel::Beginner, FocusArea::FullBody)
            .iter()
            .filter(|e| e.equipment == Equipment::None)
            .collect()
    }

    pub fn warmups(&self) -> &[MicroExercise] {
        &self.data.warmups
    }

    pub fn cooldowns(&self) -> &[MicroExercise] {
        &self.data.cooldowns
    }

    pub fn rules(&self) -> &ExclusionRules {
        &self.data.rules
    }

    pub fn summary(&self) -> CatalogSummary {
        let rules = &self.data.rules;
        let mut injury_keywords: Vec<String> = rules
            .warmup_injuries
            .keywords()
            .chain(rules.cooldown_injuries.keywords())
            .chain(rules.main_injuries.keywords())
            .chain(rules.focus_injuries.keywords())
            .map(str::to_string)
            .collect();
        injury_keywords.sort();
        injury_keywords.dedup();

        CatalogSummary {
            meal_templates: self
                .data
                .meals
                .iter()
                .map(|(time, t)| (time.as_str(), t.len()))
                .collect(),
            workout_exercises: self
                .data
                .workouts
                .iter()
                .map(|(kind, l)| (kind.as_str(), l.len()))
                .collect(),
            focus_exercises: self.data.focus.values().map(Vec::len).sum(),
            warmups: self.data.warmups.len(),
            cooldowns: self.data.cooldowns.len(),
            allergy_keywords: rules.allergies.keywords().map(str::to_string).collect(),
            injury_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        for time in MealTime::ALL {
            assert_eq!(catalog.meal_templates(time).len(), 5);
        }
        for workout_type in WorkoutType::ALL {
            assert_eq!(catalog.workout_library(workout_type).len(), 10);
        }
        assert_eq!(catalog.warmups().len(), 10);
        assert_eq!(catalog.cooldowns().len(), 10);
    }

    #[test]
    fn test_safe_default_is_bodyweight_only() {
        let catalog = Catalog::builtin().unwrap();
        let safe = catalog.safe_default();
        assert!(!safe.is_empty());
        assert!(safe.iter().all(|e| e.equipment == Equipment::None));
    }

    #[test]
    fn test_rejects_empty_meal_time() {
        let mut data = builtin_data();
        data.meals.insert(MealTime::Snack, Vec::new());
        assert_eq!(
            Catalog::new(data).unwrap_err(),
            CatalogError::EmptyMealTime("snack")
        );
    }

    #[test]
    fn test_rejects_missing_workout_library() {
        let mut data = builtin_data();
        data.workouts.remove(&WorkoutType::Cardio);
        assert_eq!(
            Catalog::new(data).unwrap_err(),
            CatalogError::EmptyWorkoutLibrary("cardio")
        );
    }

    #[test]
    fn test_rejects_missing_safe_default() {
        let mut data = builtin_data();
        data.focus.remove(&(FitnessLevel::Beginner, FocusArea::FullBody));
        assert_eq!(Catalog::new(data).unwrap_err(), CatalogError::EmptySafeDefault);
    }

    #[test]
    fn test_summary_lists_keywords() {
        let summary = Catalog::builtin().unwrap().summary();
        assert_eq!(summary.meal_templates["breakfast"], 5);
        assert!(summary.injury_keywords.contains(&"knee".to_string()));
        assert!(summary.injury_keywords.contains(&"wrist".to_string()));
        assert!(summary.allergy_keywords.contains(&"dairy".to_string()));
    }
}
