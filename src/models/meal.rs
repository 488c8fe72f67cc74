//! Meal time model

use serde::{Deserialize, Serialize};

/// Meal time category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealTime {
    pub const ALL: [MealTime; 4] = [
        MealTime::Breakfast,
        MealTime::Lunch,
        MealTime::Dinner,
        MealTime::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
            MealTime::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealTime::Breakfast),
            "lunch" => Some(MealTime::Lunch),
            "dinner" => Some(MealTime::Dinner),
            "snack" => Some(MealTime::Snack),
            _ => None,
        }
    }

    /// Breakfast and snacks are topped up with yogurt, other meals with paneer
    pub fn is_light(&self) -> bool {
        matches!(self, MealTime::Breakfast | MealTime::Snack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_time_round_trip() {
        for time in MealTime::ALL {
            assert_eq!(MealTime::from_str(time.as_str()), Some(time));
        }
        assert_eq!(MealTime::from_str(" Dinner "), Some(MealTime::Dinner));
        assert_eq!(MealTime::from_str("brunch"), None);
    }
}
