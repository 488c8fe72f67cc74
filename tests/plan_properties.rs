//! Property tests for generated plans

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fitplan::catalog::Catalog;
use fitplan::planner::{self, macro_scaler, SectionKind};
use fitplan::tools::validation;

const WORKOUT_TYPES: [&str; 4] = ["gym", "home", "cardio", "strength"];
const LEVELS: [&str; 3] = ["beginner", "intermediate", "advanced"];
const MEAL_TIMES: [&str; 4] = ["breakfast", "lunch", "dinner", "snack"];

proptest! {
    #[test]
    fn workout_sections_add_up_to_requested_minutes(
        minutes in 15i64..=180,
        type_idx in 0usize..4,
        level_idx in 0usize..3,
        seed in any::<u64>(),
    ) {
        let catalog = Catalog::builtin().unwrap();
        let request = validation::workout_request(
            WORKOUT_TYPES[type_idx],
            minutes,
            LEVELS[level_idx],
            Some("dumbbells"),
            Some("knee"),
            "general fitness",
        )
        .unwrap();
        let plan = planner::generate_workout(&catalog, &request, &mut StdRng::seed_from_u64(seed));

        let section_sum: u32 = plan.sections().iter().map(|s| s.duration()).sum();
        prop_assert_eq!(section_sum, minutes as u32);
        prop_assert_eq!(plan.total_duration(), minutes as u32);

        let knee = ["knee".to_string()];
        for exercise in plan.main().exercises() {
            prop_assert!(
                !catalog.rules().main_injuries.excludes(&exercise.name.to_lowercase(), &knee),
                "knee injury kept {}",
                exercise.name
            );
        }

        let main = plan.main().exercises().len();
        prop_assert!((1..=8).contains(&main), "main section has {} exercises", main);
    }

    #[test]
    fn edge_sections_stay_within_their_budget(
        minutes in 15i64..=180,
        seed in any::<u64>(),
    ) {
        let catalog = Catalog::builtin().unwrap();
        let request = validation::workout_request("home", minutes, "beginner", None, None, "mobility").unwrap();
        let plan = planner::generate_workout(&catalog, &request, &mut StdRng::seed_from_u64(seed));

        for section in [plan.warmup(), plan.cooldown()] {
            prop_assert!(matches!(section.kind(), SectionKind::Warmup | SectionKind::Cooldown));
            let seconds: u32 = section.exercises().iter().filter_map(|e| e.duration).sum();
            prop_assert!(seconds <= section.duration() * 60);
        }
    }

    #[test]
    fn meal_totals_match_item_sums(
        time_idx in 0usize..4,
        calories in 100.0f64..3000.0,
        protein in 1.0f64..150.0,
        seed in any::<u64>(),
    ) {
        let catalog = Catalog::builtin().unwrap();
        let request = validation::meal_request(
            MEAL_TIMES[time_idx], calories, protein, 40.0, 15.0, Some("peanut"), "maintenance",
        )
        .unwrap();
        let meal = planner::generate_meal(&catalog, &request, &mut StdRng::seed_from_u64(seed)).unwrap();

        let total = meal.total_macros();
        let calories_sum: f64 = meal.items().iter().map(|i| i.macros.calories).sum();
        let protein_sum: f64 = meal.items().iter().map(|i| i.macros.protein).sum();
        prop_assert!((total.calories - calories_sum).abs() < 1e-9);
        prop_assert!((total.protein - protein_sum).abs() < 1e-9);
    }

    #[test]
    fn item_scale_is_bounded(target in 0.0f64..10_000.0, baseline in 1.0f64..2_000.0) {
        let scale = macro_scaler::item_scale(target, baseline);
        prop_assert!((0.5..=2.0).contains(&scale));
    }

    #[test]
    fn day_plan_total_matches_its_meals(seed in any::<u64>()) {
        let catalog = Catalog::builtin().unwrap();
        let request = validation::day_plan_request(None, Some("dairy")).unwrap();
        let plan = planner::generate_day_plan(&catalog, &request, &mut StdRng::seed_from_u64(seed));

        let calories: f64 = plan.meals().iter().map(|m| m.total_macros().calories).sum();
        prop_assert!((plan.total_nutrition().calories - calories).abs() < 1e-9);
    }
}
