//! Workout enums
//!
//! Workout types, fitness levels, focus areas, equipment tags and intensity labels.

use serde::{Deserialize, Serialize};

/// Workout type (selects an exercise library)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Gym,
    Home,
    Cardio,
    Strength,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 4] = [
        WorkoutType::Gym,
        WorkoutType::Home,
        WorkoutType::Cardio,
        WorkoutType::Strength,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Gym => "gym",
            WorkoutType::Home => "home",
            WorkoutType::Cardio => "cardio",
            WorkoutType::Strength => "strength",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gym" => Some(WorkoutType::Gym),
            "home" => Some(WorkoutType::Home),
            "cardio" => Some(WorkoutType::Cardio),
            "strength" => Some(WorkoutType::Strength),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutType::Gym => "Gym",
            WorkoutType::Home => "Home",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
        }
    }

    /// Focus-area workouts only exist for gym and home
    pub fn supports_focus(&self) -> bool {
        matches!(self, WorkoutType::Gym | WorkoutType::Home)
    }
}

/// User fitness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(FitnessLevel::Beginner),
            "intermediate" => Some(FitnessLevel::Intermediate),
            "advanced" => Some(FitnessLevel::Advanced),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

/// Body region targeted by a focus-area workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    FullBody,
    Upper,
    Lower,
    Core,
}

impl FocusArea {
    pub const ALL: [FocusArea; 4] = [
        FocusArea::FullBody,
        FocusArea::Upper,
        FocusArea::Lower,
        FocusArea::Core,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusArea::FullBody => "full_body",
            FocusArea::Upper => "upper",
            FocusArea::Lower => "lower",
            FocusArea::Core => "core",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "full_body" | "full body" | "fullbody" => Some(FocusArea::FullBody),
            "upper" => Some(FocusArea::Upper),
            "lower" => Some(FocusArea::Lower),
            "core" => Some(FocusArea::Core),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FocusArea::FullBody => "Full Body",
            FocusArea::Upper => "Upper",
            FocusArea::Lower => "Lower",
            FocusArea::Core => "Core",
        }
    }
}

/// Equipment an exercise needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    None,
    Chair,
    Dumbbell,
    Barbell,
    CableMachine,
    Machine,
    PullupBar,
    DipBar,
    LegPress,
    AbWheel,
    Bench,
    Box,
    JumpRope,
}

impl Equipment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::None => "none",
            Equipment::Chair => "chair",
            Equipment::Dumbbell => "dumbbell",
            Equipment::Barbell => "barbell",
            Equipment::CableMachine => "cable_machine",
            Equipment::Machine => "machine",
            Equipment::PullupBar => "pullup_bar",
            Equipment::DipBar => "dip_bar",
            Equipment::LegPress => "leg_press",
            Equipment::AbWheel => "ab_wheel",
            Equipment::Bench => "bench",
            Equipment::Box => "box",
            Equipment::JumpRope => "jump_rope",
        }
    }

    /// Parse a user-supplied equipment keyword, accepting common spellings
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', " ").as_str() {
            "none" | "bodyweight" => Some(Equipment::None),
            "chair" => Some(Equipment::Chair),
            "dumbbell" | "dumbbells" => Some(Equipment::Dumbbell),
            "barbell" | "barbells" => Some(Equipment::Barbell),
            "cable_machine" | "cable machine" | "cable" | "cables" => Some(Equipment::CableMachine),
            "machine" | "machines" => Some(Equipment::Machine),
            "pullup_bar" | "pullup bar" | "pull up bar" => Some(Equipment::PullupBar),
            "dip_bar" | "dip bar" | "dip bars" => Some(Equipment::DipBar),
            "leg_press" | "leg press" => Some(Equipment::LegPress),
            "ab_wheel" | "ab wheel" => Some(Equipment::AbWheel),
            "bench" => Some(Equipment::Bench),
            "box" | "plyo box" => Some(Equipment::Box),
            "jump_rope" | "jump rope" | "skipping rope" => Some(Equipment::JumpRope),
            _ => None,
        }
    }

    /// Free weights and cables must be declared before a gym plan uses them;
    /// everything else is assumed to be part of any gym
    pub fn needs_declaration_at_gym(&self) -> bool {
        matches!(
            self,
            Equipment::Barbell | Equipment::Dumbbell | Equipment::CableMachine
        )
    }

    /// Equipment a home workout can assume without asking
    pub fn is_home_default(&self) -> bool {
        matches!(self, Equipment::None | Equipment::Chair | Equipment::Dumbbell)
    }
}

/// Perceived intensity label carried on every exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Easy,
    Moderate,
    Hard,
}

/// Repetition prescription: a count, or free text such as "60 seconds"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Text(String),
}

impl Reps {
    pub fn text(s: impl Into<String>) -> Self {
        Reps::Text(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workout_enums() {
        assert_eq!(WorkoutType::from_str("Gym"), Some(WorkoutType::Gym));
        assert_eq!(WorkoutType::from_str("yoga"), None);
        assert_eq!(FitnessLevel::from_str("ADVANCED"), Some(FitnessLevel::Advanced));
        assert_eq!(FocusArea::from_str("full body"), Some(FocusArea::FullBody));
        assert_eq!(FocusArea::from_str("legs"), None);
    }

    #[test]
    fn test_equipment_keywords() {
        assert_eq!(Equipment::from_keyword("dumbbells"), Some(Equipment::Dumbbell));
        assert_eq!(Equipment::from_keyword("Cable Machine"), Some(Equipment::CableMachine));
        assert_eq!(Equipment::from_keyword("pull-up bar"), Some(Equipment::PullupBar));
        assert_eq!(Equipment::from_keyword("kettlebell"), None);

        for tag in [Equipment::CableMachine, Equipment::PullupBar, Equipment::JumpRope, Equipment::None] {
            assert_eq!(Equipment::from_keyword(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_reps_serialize_untagged() {
        assert_eq!(serde_json::to_string(&Reps::Count(12)).unwrap(), "12");
        assert_eq!(
            serde_json::to_string(&Reps::text("60 seconds")).unwrap(),
            "\"60 seconds\""
        );
    }

    #[test]
    fn test_gym_declaration_rules() {
        assert!(Equipment::Barbell.needs_declaration_at_gym());
        assert!(!Equipment::Machine.needs_declaration_at_gym());
        assert!(!Equipment::None.needs_declaration_at_gym());
        assert!(Equipment::Chair.is_home_default());
        assert!(!Equipment::Barbell.is_home_default());
    }
}
