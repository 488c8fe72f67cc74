//! Macro scaler
//!
//! Moves a meal template toward a calorie target with one shared clamp, then
//! tops up a protein shortfall with a single supplement item.

use crate::catalog::MealItemTemplate;
use crate::models::{Macros, MealTime};

use super::assembler::PlannedMealItem;

const MIN_ITEM_SCALE: f64 = 0.5;
const MAX_ITEM_SCALE: f64 = 2.0;

/// A protein gap must exceed this many grams before a supplement is added
const PROTEIN_GAP_THRESHOLD: f64 = 5.0;

/// `clamp(target / Σcalories, 0.5, 2.0)`. A zero-calorie template takes the
/// upper bound.
pub fn item_scale(target_calories: f64, baseline_calories: f64) -> f64 {
    if baseline_calories <= 0.0 {
        return MAX_ITEM_SCALE;
    }
    (target_calories / baseline_calories).clamp(MIN_ITEM_SCALE, MAX_ITEM_SCALE)
}

/// New items scaled by the same factor, each value rounded
pub fn scale_items(items: &[MealItemTemplate], target_calories: f64) -> Vec<PlannedMealItem> {
    let baseline: f64 = items.iter().map(|item| item.macros.calories).sum();
    let scale = item_scale(target_calories, baseline);

    items
        .iter()
        .map(|item| PlannedMealItem {
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            macros: item.macros.scale_rounded(scale),
        })
        .collect()
}

/// The supplement for a protein gap, if the gap is strictly more than 5 g.
/// Breakfast and snacks get Greek yogurt (up to 10 g), other meals paneer
/// (up to 7 g).
pub fn protein_supplement(
    meal_time: MealTime,
    target_protein: f64,
    current_protein: f64,
) -> Option<PlannedMealItem> {
    let gap = target_protein - current_protein;
    if gap <= PROTEIN_GAP_THRESHOLD {
        return None;
    }

    let item = if meal_time.is_light() {
        PlannedMealItem {
            name: "Greek yogurt (protein boost)".to_string(),
            quantity: "100g".to_string(),
            macros: Macros::new(100.0, gap.min(10.0), 5.0, 5.0),
        }
    } else {
        PlannedMealItem {
            name: "Paneer cubes (protein boost)".to_string(),
            quantity: "50g".to_string(),
            macros: Macros::new(90.0, gap.min(7.0), 2.0, 6.0),
        }
    };
    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MealItemTemplate> {
        vec![
            MealItemTemplate {
                name: "Poha".to_string(),
                quantity: "1 cup".to_string(),
                macros: Macros::new(180.0, 3.0, 40.0, 1.0),
            },
            MealItemTemplate {
                name: "Peanuts".to_string(),
                quantity: "30g".to_string(),
                macros: Macros::new(170.0, 7.0, 5.0, 14.0),
            },
        ]
    }

    #[test]
    fn test_scale_clamped_high() {
        // baseline 350, target 2200 -> 6.29 -> 2.0
        assert_eq!(item_scale(2200.0, 350.0), 2.0);
        let scaled = scale_items(&items(), 2200.0);
        let total: f64 = scaled.iter().map(|i| i.macros.calories).sum();
        assert_eq!(total, 700.0);
    }

    #[test]
    fn test_scale_clamped_low() {
        assert_eq!(item_scale(100.0, 350.0), 0.5);
        let scaled = scale_items(&items(), 100.0);
        assert_eq!(scaled[0].macros, Macros::new(90.0, 2.0, 20.0, 1.0));
    }

    #[test]
    fn test_zero_calorie_template() {
        assert_eq!(item_scale(500.0, 0.0), 2.0);
    }

    #[test]
    fn test_supplement_threshold_is_strict() {
        assert!(protein_supplement(MealTime::Breakfast, 25.0, 20.0).is_none());

        let boost = protein_supplement(MealTime::Breakfast, 26.0, 20.0).unwrap();
        assert_eq!(boost.name, "Greek yogurt (protein boost)");
        assert_eq!(boost.macros.protein, 6.0);

        let boost = protein_supplement(MealTime::Dinner, 26.0, 20.0).unwrap();
        assert_eq!(boost.name, "Paneer cubes (protein boost)");
        assert_eq!(boost.macros.protein, 6.0);
    }

    #[test]
    fn test_supplement_protein_is_capped() {
        let yogurt = protein_supplement(MealTime::Snack, 60.0, 10.0).unwrap();
        assert_eq!(yogurt.macros, Macros::new(100.0, 10.0, 5.0, 5.0));

        let paneer = protein_supplement(MealTime::Lunch, 60.0, 10.0).unwrap();
        assert_eq!(paneer.macros, Macros::new(90.0, 7.0, 2.0, 6.0));
    }
}
