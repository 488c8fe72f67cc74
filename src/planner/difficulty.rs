//! Difficulty scaler
//!
//! Per-level multipliers applied to baseline exercise prescriptions, and the
//! fixed prescriptions used by focus-area workouts.

use crate::catalog::ExerciseTemplate;
use crate::models::{FitnessLevel, Reps};

use super::assembler::PlannedExercise;

const BASE_SETS: f64 = 3.0;
const BASE_REST_SECONDS: f64 = 45.0;
const MIN_SETS: u32 = 2;

/// Plank holds start at this many seconds in focus workouts
const BASE_HOLD_SECONDS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub sets: f64,
    pub reps: f64,
    pub rest: f64,
    /// Focus workouts: sets per exercise
    pub focus_sets: u32,
    /// Focus workouts: inclusive rep range
    pub focus_reps: (u32, u32),
    /// Focus workouts: rest between sets
    pub focus_rest_seconds: u32,
    /// Focus workouts: seconds added to a plank hold
    pub hold_bonus_seconds: u32,
}

impl DifficultyProfile {
    pub fn for_level(level: FitnessLevel) -> Self {
        match level {
            FitnessLevel::Beginner => Self {
                sets: 2.0,
                reps: 0.7,
                rest: 60.0,
                focus_sets: 2,
                focus_reps: (8, 10),
                focus_rest_seconds: 75,
                hold_bonus_seconds: 0,
            },
            FitnessLevel::Intermediate => Self {
                sets: 3.0,
                reps: 1.0,
                rest: 45.0,
                focus_sets: 3,
                focus_reps: (10, 12),
                focus_rest_seconds: 52,
                hold_bonus_seconds: 15,
            },
            FitnessLevel::Advanced => Self {
                sets: 4.0,
                reps: 1.3,
                rest: 30.0,
                focus_sets: 4,
                focus_reps: (12, 15),
                focus_rest_seconds: 37,
                hold_bonus_seconds: 30,
            },
        }
    }

    /// Scale a main-section template into a new planned exercise.
    ///
    /// Missing sets count as 3 and missing rest as 45 seconds. Text reps pass
    /// through unchanged; timed work is scaled by the reps multiplier.
    pub fn scale(&self, template: &ExerciseTemplate) -> PlannedExercise {
        let base_sets = template.sets.map_or(BASE_SETS, f64::from);
        let sets = ((base_sets * self.sets / BASE_SETS).round() as u32).max(MIN_SETS);

        let reps = template.reps.as_ref().map(|reps| match reps {
            Reps::Count(n) => Reps::Count(self.scale_by_reps(*n)),
            Reps::Text(text) => Reps::Text(text.clone()),
        });

        let duration = template.duration_minutes.map(|d| self.scale_by_reps(d));

        let base_rest = template.rest_seconds.map_or(BASE_REST_SECONDS, f64::from);
        let rest_seconds = (base_rest * self.rest / BASE_REST_SECONDS).round() as u32;

        PlannedExercise {
            name: template.name.clone(),
            sets: Some(sets),
            reps,
            duration,
            rest_seconds,
            instructions: template.instructions.clone(),
            difficulty: template.intensity,
        }
    }

    fn scale_by_reps(&self, value: u32) -> u32 {
        (f64::from(value) * self.reps).round() as u32
    }

    /// "8-10" style rep range for focus workouts
    pub fn rep_range(&self) -> Reps {
        Reps::Text(format!("{}-{}", self.focus_reps.0, self.focus_reps.1))
    }

    /// Timed plank hold for core focus workouts
    pub fn plank_hold(&self) -> Reps {
        Reps::Text(format!("{} seconds", BASE_HOLD_SECONDS + self.hold_bonus_seconds))
    }
}
