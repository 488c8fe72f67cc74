//! Request validation
//!
//! Turns raw tool parameters into engine requests. Every rejection carries a
//! stable error code.

use thiserror::Error;

use crate::models::{FitnessLevel, FocusArea, Macros, MealTime, PlanKind, WorkoutType};
use crate::planner::{DayPlanRequest, FocusWorkoutRequest, MealRequest, WorkoutRequest};

pub const MIN_WORKOUT_MINUTES: i64 = 15;
pub const MAX_WORKOUT_MINUTES: i64 = 180;
pub const MIN_FOCUS_MINUTES: i64 = 10;
pub const MAX_FOCUS_MINUTES: i64 = 180;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("goal is required")]
    MissingGoal,

    #[error("meal_time must be one of: breakfast, lunch, dinner, snack (got '{0}')")]
    InvalidMealTime(String),

    #[error("{field} must be a positive number (got {value})")]
    InvalidTarget { field: &'static str, value: f64 },

    #[error("workout_type must be one of: {allowed} (got '{value}')")]
    InvalidWorkoutType { value: String, allowed: &'static str },

    #[error("fitness_level must be one of: beginner, intermediate, advanced (got '{0}')")]
    InvalidFitnessLevel(String),

    #[error("focus_area must be one of: full_body, upper, lower, core (got '{0}')")]
    InvalidFocusArea(String),

    #[error("duration must be between {min} and {max} minutes (got {value})")]
    InvalidDuration { value: i64, min: i64, max: i64 },

    #[error("user_id must be a positive integer (got {0})")]
    InvalidUserId(i64),

    #[error("plan_kind must be one of: meal, workout, day_meal_plan, focus_workout (got '{0}')")]
    InvalidPlanKind(String),
}

impl ValidationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingGoal => "MISSING_GOAL",
            ValidationError::InvalidMealTime(_) => "INVALID_MEAL_TIME",
            ValidationError::InvalidTarget { field, .. } => match *field {
                "protein" => "INVALID_PROTEIN",
                "carbs" => "INVALID_CARBS",
                "fats" => "INVALID_FATS",
                _ => "INVALID_CALORIES",
            },
            ValidationError::InvalidWorkoutType { .. } => "INVALID_WORKOUT_TYPE",
            ValidationError::InvalidFitnessLevel(_) => "INVALID_FITNESS_LEVEL",
            ValidationError::InvalidFocusArea(_) => "INVALID_FOCUS_AREA",
            ValidationError::InvalidDuration { .. } => "INVALID_DURATION",
            ValidationError::InvalidUserId(_) => "INVALID_USER_ID",
            ValidationError::InvalidPlanKind(_) => "INVALID_PLAN_KIND",
        }
    }

    /// `CODE: message`, as returned to MCP clients
    pub fn to_client_message(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}

/// Split a comma-separated keyword list, trimming and lowercasing each entry
pub fn split_keywords(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

fn positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidTarget { field, value })
    }
}

fn goal(raw: &str) -> Result<String, ValidationError> {
    let goal = raw.trim();
    if goal.is_empty() {
        return Err(ValidationError::MissingGoal);
    }
    Ok(goal.to_string())
}

fn meal_time(raw: &str) -> Result<MealTime, ValidationError> {
    MealTime::from_str(raw).ok_or_else(|| ValidationError::InvalidMealTime(raw.to_string()))
}

fn fitness_level(raw: &str) -> Result<FitnessLevel, ValidationError> {
    FitnessLevel::from_str(raw).ok_or_else(|| ValidationError::InvalidFitnessLevel(raw.to_string()))
}

fn duration(value: i64, min: i64, max: i64) -> Result<u32, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::InvalidDuration { value, min, max });
    }
    // bounded above by `max`, which fits in u32
    Ok(value as u32)
}

pub fn meal_request(
    meal_time_raw: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    allergies: Option<&str>,
    goal_raw: &str,
) -> Result<MealRequest, ValidationError> {
    let meal_time = meal_time(meal_time_raw)?;
    let goal = goal(goal_raw)?;
    let target = Macros::new(
        positive("calories", calories)?,
        positive("protein", protein)?,
        positive("carbs", carbs)?,
        positive("fats", fats)?,
    );

    Ok(MealRequest {
        meal_time,
        target,
        allergies: split_keywords(allergies),
        goal,
    })
}

pub fn day_plan_request(
    meal_time_raw: Option<&str>,
    allergies: Option<&str>,
) -> Result<DayPlanRequest, ValidationError> {
    let meal_time = meal_time_raw.map(meal_time).transpose()?;
    Ok(DayPlanRequest {
        meal_time,
        allergies: split_keywords(allergies),
    })
}

pub fn workout_request(
    workout_type_raw: &str,
    duration_minutes: i64,
    fitness_level_raw: &str,
    equipment: Option<&str>,
    injuries: Option<&str>,
    goal_raw: &str,
) -> Result<WorkoutRequest, ValidationError> {
    let workout_type = WorkoutType::from_str(workout_type_raw).ok_or_else(|| {
        ValidationError::InvalidWorkoutType {
            value: workout_type_raw.to_string(),
            allowed: "gym, home, cardio, strength",
        }
    })?;
    let level = fitness_level(fitness_level_raw)?;
    let duration_minutes = duration(duration_minutes, MIN_WORKOUT_MINUTES, MAX_WORKOUT_MINUTES)?;
    let goal = goal(goal_raw)?;

    Ok(WorkoutRequest {
        workout_type,
        duration_minutes,
        level,
        equipment: split_keywords(equipment),
        injuries: split_keywords(injuries),
        goal,
    })
}

pub fn focus_workout_request(
    workout_type_raw: &str,
    focus_area_raw: &str,
    difficulty_raw: &str,
    duration_minutes: i64,
    equipment: &[String],
    injuries: Option<&str>,
) -> Result<FocusWorkoutRequest, ValidationError> {
    let workout_type = WorkoutType::from_str(workout_type_raw)
        .filter(WorkoutType::supports_focus)
        .ok_or_else(|| ValidationError::InvalidWorkoutType {
            value: workout_type_raw.to_string(),
            allowed: "gym, home",
        })?;
    let focus_area = FocusArea::from_str(focus_area_raw)
        .ok_or_else(|| ValidationError::InvalidFocusArea(focus_area_raw.to_string()))?;
    let level = fitness_level(difficulty_raw)?;
    let duration_minutes = duration(duration_minutes, MIN_FOCUS_MINUTES, MAX_FOCUS_MINUTES)?;

    Ok(FocusWorkoutRequest {
        workout_type,
        focus_area,
        level,
        duration_minutes,
        equipment: equipment.iter().map(|e| e.trim().to_lowercase()).collect(),
        injuries: split_keywords(injuries),
    })
}

/// Optional owner of a plan to persist; must be positive when present
pub fn user_id(raw: Option<i64>) -> Result<Option<i64>, ValidationError> {
    match raw {
        Some(id) if id <= 0 => Err(ValidationError::InvalidUserId(id)),
        other => Ok(other),
    }
}

pub fn plan_kind(raw: Option<&str>) -> Result<Option<PlanKind>, ValidationError> {
    raw.map(|s| PlanKind::from_str(s).ok_or_else(|| ValidationError::InvalidPlanKind(s.to_string())))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keywords() {
        assert_eq!(split_keywords(Some(" Knee, BACK ,,")), vec!["knee", "back"]);
        assert!(split_keywords(None).is_empty());
        assert!(split_keywords(Some("  ")).is_empty());
    }

    #[test]
    fn test_meal_request() {
        let req = meal_request("Lunch", 600.0, 30.0, 70.0, 20.0, Some("dairy, nuts"), " muscle gain ").unwrap();
        assert_eq!(req.meal_time, MealTime::Lunch);
        assert_eq!(req.target.calories, 600.0);
        assert_eq!(req.allergies, vec!["dairy", "nuts"]);
        assert_eq!(req.goal, "muscle gain");
    }

    #[test]
    fn test_meal_request_codes() {
        let err = meal_request("brunch", 600.0, 30.0, 70.0, 20.0, None, "x").unwrap_err();
        assert_eq!(err.code(), "INVALID_MEAL_TIME");

        let err = meal_request("lunch", 0.0, 30.0, 70.0, 20.0, None, "x").unwrap_err();
        assert_eq!(err.code(), "INVALID_CALORIES");

        let err = meal_request("lunch", 600.0, 30.0, -1.0, 20.0, None, "x").unwrap_err();
        assert_eq!(err.code(), "INVALID_CARBS");

        let err = meal_request("lunch", 600.0, 30.0, 70.0, 20.0, None, "  ").unwrap_err();
        assert_eq!(err, ValidationError::MissingGoal);
    }

    #[test]
    fn test_workout_duration_bounds() {
        assert!(workout_request("gym", 15, "beginner", None, None, "fit").is_ok());
        assert!(workout_request("gym", 180, "beginner", None, None, "fit").is_ok());

        let err = workout_request("gym", 14, "beginner", None, None, "fit").unwrap_err();
        assert_eq!(err.code(), "INVALID_DURATION");
        let err = workout_request("gym", 181, "beginner", None, None, "fit").unwrap_err();
        assert_eq!(err.code(), "INVALID_DURATION");

        let err = workout_request("yoga", 30, "beginner", None, None, "fit").unwrap_err();
        assert_eq!(err.code(), "INVALID_WORKOUT_TYPE");
        let err = workout_request("gym", 30, "elite", None, None, "fit").unwrap_err();
        assert_eq!(err.code(), "INVALID_FITNESS_LEVEL");
    }

    #[test]
    fn test_focus_request() {
        let req = focus_workout_request("home", "full body", "advanced", 10, &["Dumbbell".into()], Some("knee"))
            .unwrap();
        assert_eq!(req.focus_area, FocusArea::FullBody);
        assert_eq!(req.equipment, vec!["dumbbell"]);

        let err = focus_workout_request("cardio", "core", "beginner", 30, &[], None).unwrap_err();
        assert_eq!(err.code(), "INVALID_WORKOUT_TYPE");
        let err = focus_workout_request("gym", "legs", "beginner", 30, &[], None).unwrap_err();
        assert_eq!(err.code(), "INVALID_FOCUS_AREA");
        let err = focus_workout_request("gym", "core", "beginner", 9, &[], None).unwrap_err();
        assert_eq!(err.code(), "INVALID_DURATION");
    }

    #[test]
    fn test_user_id_and_kind() {
        assert_eq!(user_id(None), Ok(None));
        assert_eq!(user_id(Some(3)), Ok(Some(3)));
        assert_eq!(user_id(Some(0)).unwrap_err().code(), "INVALID_USER_ID");
        assert_eq!(plan_kind(Some("workout")), Ok(Some(PlanKind::Workout)));
        assert!(plan_kind(Some("lunch")).is_err());
    }

    #[test]
    fn test_client_message() {
        let err = ValidationError::InvalidUserId(-2);
        assert_eq!(
            err.to_client_message(),
            "INVALID_USER_ID: user_id must be a positive integer (got -2)"
        );
    }
}
