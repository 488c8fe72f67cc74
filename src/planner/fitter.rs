//! Time-budget fitter
//!
//! Greedy packing of warm-up and cool-down sections, plus the sizing rules
//! for the main section.

use crate::catalog::MicroExercise;

use super::assembler::PlannedExercise;

/// Warm-up and cool-down are each capped at this many minutes
const MAX_EDGE_SECTION_MINUTES: u32 = 10;

/// Rough minutes one main-section exercise takes, rest included
const MINUTES_PER_EXERCISE: u32 = 6;
const MIN_MAIN_EXERCISES: usize = 5;
const MAX_MAIN_EXERCISES: usize = 8;

/// Minute split of a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDurations {
    pub warmup: u32,
    pub main: u32,
    pub cooldown: u32,
}

/// Warm-up and cool-down each get 15% of the total (floored, at most 10
/// minutes); the main section gets the rest
pub fn section_durations(total_minutes: u32) -> SectionDurations {
    // split before multiplying so large totals cannot overflow
    let fifteen_percent = total_minutes / 100 * 15 + total_minutes % 100 * 15 / 100;
    let edge = fifteen_percent.min(MAX_EDGE_SECTION_MINUTES);
    SectionDurations {
        warmup: edge,
        main: total_minutes - 2 * edge,
        cooldown: edge,
    }
}

/// `clamp(floor(budget / 6), 5, 8)`
pub fn main_exercise_count(budget_minutes: u32) -> usize {
    ((budget_minutes / MINUTES_PER_EXERCISE) as usize).clamp(MIN_MAIN_EXERCISES, MAX_MAIN_EXERCISES)
}

/// Walk the (already shuffled) candidates and accept each one that still fits
/// the budget. Stops once within one minute of the budget. The accepted
/// minutes never exceed `budget_minutes`.
pub fn fit_time_budget(candidates: &[&MicroExercise], budget_minutes: u32) -> Vec<PlannedExercise> {
    let mut accepted = Vec::new();
    let mut running = 0;

    for candidate in candidates {
        if running + candidate.minutes <= budget_minutes {
            accepted.push(PlannedExercise::timed(candidate));
            running += candidate.minutes;
        }
        if running + 1 >= budget_minutes {
            break;
        }
    }

    accepted
}
