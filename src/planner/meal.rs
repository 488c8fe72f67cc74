//! Meal generation
//!
//! Single scaled meals and whole-day meal plans.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::models::{Macros, MealTime};

use super::assembler::{DayMealPlan, MealPlan, PlannedMealItem};
use super::exclusion::{filter_allergies_or_keep, filter_excluded, normalize_keywords};
use super::macro_scaler::{protein_supplement, scale_items};
use super::selector::select;

/// Input for a single meal
#[derive(Debug, Clone)]
pub struct MealRequest {
    pub meal_time: MealTime,
    /// Calorie and macro targets; only calories and protein drive the math
    pub target: Macros,
    pub allergies: Vec<String>,
    /// Informational only
    pub goal: String,
}

/// Generate one meal scaled toward the calorie target.
///
/// Returns `None` only when the catalog has no templates for the meal time.
pub fn generate_meal<R: Rng + ?Sized>(
    catalog: &Catalog,
    request: &MealRequest,
    rng: &mut R,
) -> Option<MealPlan> {
    let allergies = normalize_keywords(&request.allergies);
    let templates = catalog.meal_templates(request.meal_time);
    let filtered = filter_allergies_or_keep(templates, &catalog.rules().allergies, &allergies);

    if filtered.fallback {
        warn!(
            meal_time = request.meal_time.as_str(),
            allergies = ?allergies,
            "every template conflicts with the allergy list, using the unfiltered list"
        );
    }

    let template = select(&filtered.pool, 1, rng).into_iter().next()?;

    let mut items = scale_items(&template.items, request.target.calories);
    let scaled_protein: f64 = items.iter().map(|item| item.macros.protein).sum();
    if let Some(boost) = protein_supplement(request.meal_time, request.target.protein, scaled_protein) {
        if catalog.rules().allergies.excludes(&boost.name.to_lowercase(), &allergies) {
            debug!(item = %boost.name, "protein supplement conflicts with the allergy list, skipped");
        } else {
            debug!(item = %boost.name, protein = boost.macros.protein, "added protein supplement");
            items.push(boost);
        }
    }

    let plan = MealPlan::assemble(
        template.name.clone(),
        request.meal_time,
        items,
        template.instructions.clone(),
        template.alternatives.clone(),
        filtered.fallback,
    );

    info!(
        meal = plan.name(),
        meal_time = request.meal_time.as_str(),
        calories = plan.total_macros().calories,
        goal = %request.goal,
        "generated meal"
    );

    Some(plan)
}

/// Input for a day meal plan
#[derive(Debug, Clone, Default)]
pub struct DayPlanRequest {
    /// Plan a single meal time instead of the whole day
    pub meal_time: Option<MealTime>,
    pub allergies: Vec<String>,
}

/// How many meals each slot gets
fn slot_count(meal_time: MealTime) -> usize {
    match meal_time {
        MealTime::Snack => 2,
        _ => 1,
    }
}

/// Compose unscaled meals for a day (or one meal time).
///
/// Each slot draws from the allergy-filtered templates only; a slot whose
/// templates are all excluded contributes no meals.
pub fn generate_day_plan<R: Rng + ?Sized>(
    catalog: &Catalog,
    request: &DayPlanRequest,
    rng: &mut R,
) -> DayMealPlan {
    let allergies = normalize_keywords(&request.allergies);
    let slots: Vec<MealTime> = match request.meal_time {
        Some(time) => vec![time],
        None => MealTime::ALL.to_vec(),
    };

    let mut meals = Vec::new();
    for time in slots {
        let pool = filter_excluded(
            catalog.meal_templates(time),
            &catalog.rules().allergies,
            &allergies,
        );
        if pool.is_empty() {
            warn!(meal_time = time.as_str(), "no allergy-safe templates, slot left empty");
            continue;
        }

        for template in select(&pool, slot_count(time), rng) {
            let items = template
                .items
                .iter()
                .map(|item| PlannedMealItem {
                    name: item.name.clone(),
                    quantity: item.quantity.clone(),
                    macros: item.macros,
                })
                .collect();
            meals.push(MealPlan::assemble(
                template.name.clone(),
                time,
                items,
                template.instructions.clone(),
                template.alternatives.clone(),
                false,
            ));
        }
    }

    let plan = DayMealPlan::assemble(meals);
    info!(
        meals = plan.meals().len(),
        calories = plan.total_nutrition().calories,
        "generated day meal plan"
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_data, MealItemTemplate, MealTemplate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(meal_time: MealTime, calories: f64, protein: f64, allergies: &[&str]) -> MealRequest {
        MealRequest {
            meal_time,
            target: Macros::new(calories, protein, 50.0, 15.0),
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
            goal: "maintenance".to_string(),
        }
    }

    /// Catalog whose breakfast list is a single template with the given items
    fn single_breakfast(items: Vec<MealItemTemplate>) -> Catalog {
        let mut data = builtin_data();
        data.meals.insert(
            MealTime::Breakfast,
            vec![MealTemplate {
                name: "Test Breakfast".to_string(),
                items,
                instructions: String::new(),
                alternatives: String::new(),
            }],
        );
        Catalog::new(data).unwrap()
    }

    fn item(name: &str, macros: Macros) -> MealItemTemplate {
        MealItemTemplate {
            name: name.to_string(),
            quantity: "1 serving".to_string(),
            macros,
        }
    }

    #[test]
    fn test_clamp_caps_calories_at_double() {
        let catalog = single_breakfast(vec![
            item("oats", Macros::new(200.0, 10.0, 30.0, 5.0)),
            item("berries", Macros::new(150.0, 5.0, 20.0, 1.0)),
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        let plan = generate_meal(&catalog, &request(MealTime::Breakfast, 2200.0, 0.0, &[]), &mut rng).unwrap();
        assert_eq!(plan.total_macros().calories, 700.0);
        assert_eq!(plan.items().len(), 2);
    }

    #[test]
    fn test_protein_gap_of_five_adds_nothing() {
        // scale 1.0 keeps protein at 20
        let catalog = single_breakfast(vec![item("tofu scramble", Macros::new(400.0, 20.0, 10.0, 20.0))]);
        let mut rng = StdRng::seed_from_u64(3);

        let plan = generate_meal(&catalog, &request(MealTime::Breakfast, 400.0, 25.0, &[]), &mut rng).unwrap();
        assert_eq!(plan.items().len(), 1);

        let plan = generate_meal(&catalog, &request(MealTime::Breakfast, 400.0, 26.0, &[]), &mut rng).unwrap();
        assert_eq!(plan.items().len(), 2);
        assert_eq!(plan.items()[1].macros.protein, 6.0);
        assert_eq!(plan.total_macros().protein, 26.0);
        assert_eq!(plan.total_macros().calories, 500.0);
    }

    #[test]
    fn test_totals_include_supplement() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let plan = generate_meal(&catalog, &request(MealTime::Dinner, 500.0, 80.0, &[]), &mut rng).unwrap();
        let summed: Macros = plan.items().iter().map(|i| i.macros).sum();
        assert_eq!(plan.total_macros(), summed);
        assert!(plan.items().last().unwrap().name.starts_with("Paneer cubes"));
    }

    #[test]
    fn test_allergy_respected_when_possible() {
        let catalog = Catalog::builtin().unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = generate_meal(&catalog, &request(MealTime::Lunch, 600.0, 20.0, &["Paneer"]), &mut rng)
                .unwrap();
            assert!(!plan.allergy_fallback());
            assert!(plan.items().iter().all(|i| !i.name.to_lowercase().contains("paneer")));
        }
    }

    #[test]
    fn test_ingredient_keywords_keep_allergens_out() {
        let catalog = Catalog::builtin().unwrap();
        let cases = [
            ("peanuts", "peanut"),
            ("wheat", "wheat"),
            ("tofu", "tofu"),
            ("chickpeas", "chickpea"),
            ("lentils", "lentil"),
            ("oats", "oat"),
            ("rice", "rice"),
            ("bread", "bread"),
            ("cashews", "cashew"),
            ("walnuts", "walnut"),
            ("almonds", "almond"),
            ("yogurt", "yogurt"),
            ("paneer", "paneer"),
        ];

        for meal_time in MealTime::ALL {
            for (keyword, needle) in cases {
                for seed in 0..200 {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let plan = generate_meal(&catalog, &request(meal_time, 500.0, 60.0, &[keyword]), &mut rng)
                        .unwrap();
                    if plan.allergy_fallback() {
                        continue;
                    }
                    for item in plan.items() {
                        assert!(
                            !item.name.to_lowercase().contains(needle),
                            "{:?} with {:?} served {}",
                            meal_time,
                            keyword,
                            item.name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_supplement_skipped_when_it_conflicts() {
        let catalog = single_breakfast(vec![item("Rolled oats", Macros::new(300.0, 8.0, 50.0, 5.0))]);
        let mut rng = StdRng::seed_from_u64(1);

        let plan = generate_meal(&catalog, &request(MealTime::Breakfast, 300.0, 40.0, &["dairy"]), &mut rng)
            .unwrap();
        assert_eq!(plan.items().len(), 1);
        assert_eq!(plan.total_macros().protein, 8.0);

        let plan = generate_meal(&catalog, &request(MealTime::Breakfast, 300.0, 40.0, &[]), &mut rng).unwrap();
        assert!(plan.items()[1].name.starts_with("Greek yogurt"));
    }

    #[test]
    fn test_allergy_fallback_is_flagged() {
        let catalog = single_breakfast(vec![item("Greek yogurt", Macros::new(200.0, 20.0, 10.0, 10.0))]);
        let mut rng = StdRng::seed_from_u64(5);
        let plan = generate_meal(&catalog, &request(MealTime::Breakfast, 200.0, 20.0, &["dairy"]), &mut rng)
            .unwrap();
        assert!(plan.allergy_fallback());
        assert_eq!(plan.name(), "Test Breakfast");
    }

    #[test]
    fn test_day_plan_slots_and_totals() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        let plan = generate_day_plan(&catalog, &DayPlanRequest::default(), &mut rng);

        let times: Vec<MealTime> = plan.meals().iter().map(|m| m.meal_time()).collect();
        assert_eq!(
            times,
            vec![MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner, MealTime::Snack, MealTime::Snack]
        );
        assert_ne!(plan.meals()[3].name(), plan.meals()[4].name());

        let summed: Macros = plan.meals().iter().map(|m| m.total_macros()).sum();
        assert_eq!(plan.total_nutrition(), summed);
    }

    #[test]
    fn test_day_plan_has_no_unfiltered_fallback() {
        let catalog = single_breakfast(vec![item("paneer", Macros::new(200.0, 20.0, 10.0, 10.0))]);
        let mut rng = StdRng::seed_from_u64(8);
        let request = DayPlanRequest {
            meal_time: Some(MealTime::Breakfast),
            allergies: vec!["paneer".to_string()],
        };
        let plan = generate_day_plan(&catalog, &request, &mut rng);
        assert!(plan.meals().is_empty());
        assert_eq!(plan.total_nutrition(), Macros::zero());
    }

    #[test]
    fn test_same_seed_same_meal() {
        let catalog = Catalog::builtin().unwrap();
        let req = request(MealTime::Snack, 300.0, 15.0, &["nuts"]);
        let a = generate_meal(&catalog, &req, &mut StdRng::seed_from_u64(42));
        let b = generate_meal(&catalog, &req, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
