//! Shared macronutrient data structure
//!
//! Used across meal templates, generated meal items, and plan totals.

use serde::{Deserialize, Serialize};

/// Macronutrient values for a food item or a whole meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fats: f64,    // grams
}

impl Macros {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
        }
    }

    /// Create a new Macros with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every value by a multiplier, rounding each to the nearest whole unit
    pub fn scale_rounded(&self, multiplier: f64) -> Self {
        Self {
            calories: (self.calories * multiplier).round(),
            protein: (self.protein * multiplier).round(),
            carbs: (self.carbs * multiplier).round(),
            fats: (self.fats * multiplier).round(),
        }
    }

    /// Add another set of macros to this one
    pub fn add(&self, other: &Macros) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
        }
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros::add(&self, &other)
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Macros> for Macros {
    fn sum<I: Iterator<Item = &'a Macros>>(iter: I) -> Self {
        iter.fold(Macros::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_rounded() {
        let m = Macros::new(180.0, 3.0, 40.0, 1.0).scale_rounded(1.5);
        assert_eq!(m, Macros::new(270.0, 5.0, 60.0, 2.0));
    }

    #[test]
    fn test_sum() {
        let items = [Macros::new(100.0, 10.0, 5.0, 5.0), Macros::new(90.0, 7.0, 2.0, 6.0)];
        let total: Macros = items.iter().sum();
        assert_eq!(total, Macros::new(190.0, 17.0, 7.0, 11.0));
    }
}
