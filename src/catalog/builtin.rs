//! Built-in catalog contents
//!
//! Hand-authored vegetarian meal templates, exercise libraries, warm-up and
//! cool-down pools, and the exclusion keyword tables.

use std::collections::BTreeMap;

use super::{
    CatalogData, ExclusionRules, ExerciseTemplate, MealItemTemplate, MealTemplate, MicroExercise,
};
use crate::models::{Equipment, FitnessLevel, FocusArea, Intensity, Macros, MealTime, Reps, WorkoutType};
use crate::planner::exclusion::ExclusionSet;

use Equipment as Eq;
use Intensity::{Easy, Hard, Moderate};

/// Build the full built-in catalog contents
pub fn builtin_data() -> CatalogData {
    CatalogData {
        meals: meal_templates(),
        workouts: workout_libraries(),
        focus: focus_libraries(),
        warmups: warmups(),
        cooldowns: cooldowns(),
        rules: exclusion_rules(),
    }
}

// ============================================================================
// Meals
// ============================================================================

fn item(name: &str, quantity: &str, calories: f64, protein: f64, carbs: f64, fats: f64) -> MealItemTemplate {
    MealItemTemplate {
        name: name.to_string(),
        quantity: quantity.to_string(),
        macros: Macros::new(calories, protein, carbs, fats),
    }
}

fn meal(name: &str, items: Vec<MealItemTemplate>, instructions: &str, alternatives: &str) -> MealTemplate {
    MealTemplate {
        name: name.to_string(),
        items,
        instructions: instructions.to_string(),
        alternatives: alternatives.to_string(),
    }
}

fn meal_templates() -> BTreeMap<MealTime, Vec<MealTemplate>> {
    let mut meals = BTreeMap::new();

    meals.insert(MealTime::Breakfast, vec![
        meal("Protein-Rich Poha", vec![
            item("Poha (flattened rice)", "1 cup", 180.0, 3.0, 40.0, 1.0),
            item("Roasted peanuts", "30g", 170.0, 7.0, 5.0, 14.0),
            item("Mixed vegetables", "1 cup", 50.0, 2.0, 10.0, 0.0),
            item("Greek yogurt", "100g", 100.0, 10.0, 5.0, 5.0),
        ],
        "Rinse poha and drain. Heat oil, add mustard seeds and curry leaves. Sauté the vegetables, mix in poha, turmeric and salt, and cook 3-4 minutes. Garnish with peanuts and coriander. Serve with Greek yogurt on the side.",
        "Substitute poha with oats or quinoa. Replace peanuts with cashews or almonds."),
        meal("Paneer Bhurji with Whole Wheat Toast", vec![
            item("Crumbled paneer", "150g", 270.0, 21.0, 6.0, 18.0),
            item("Whole wheat toast", "2 slices", 160.0, 6.0, 28.0, 2.0),
            item("Tomatoes and onions", "1 cup", 40.0, 1.0, 9.0, 0.0),
            item("Ghee", "1 tsp", 45.0, 0.0, 0.0, 5.0),
        ],
        "Heat ghee, add cumin seeds and onions. Add tomatoes and spices. Mix in crumbled paneer and cook 5 minutes. Serve hot with toasted whole wheat bread.",
        "Replace paneer with tofu for a vegan option. Use multigrain bread instead of whole wheat."),
        meal("Moong Dal Chilla with Mint Chutney", vec![
            item("Moong dal batter", "1 cup", 200.0, 15.0, 35.0, 1.0),
            item("Paneer stuffing", "50g", 90.0, 7.0, 2.0, 6.0),
            item("Mint chutney", "2 tbsp", 20.0, 1.0, 4.0, 0.0),
            item("Oil for cooking", "1 tbsp", 120.0, 0.0, 0.0, 14.0),
        ],
        "Soak moong dal overnight and grind to a smooth batter with salt and spices. Spread thin on a hot griddle, add the paneer stuffing and fold. Cook until golden and serve with mint chutney.",
        "Use besan (chickpea flour) instead of moong dal. Stuff with mixed vegetables for variation."),
        meal("Protein Oatmeal Bowl", vec![
            item("Rolled oats", "1/2 cup", 150.0, 5.0, 27.0, 3.0),
            item("Protein powder", "1 scoop", 120.0, 24.0, 3.0, 2.0),
            item("Mixed berries", "1 cup", 70.0, 1.0, 17.0, 0.0),
            item("Almonds", "15 pieces", 100.0, 4.0, 4.0, 9.0),
            item("Honey", "1 tbsp", 60.0, 0.0, 17.0, 0.0),
        ],
        "Cook oats in milk or water until soft. Stir in protein powder. Top with berries and almonds and drizzle with honey.",
        "Use quinoa flakes instead of oats. Replace berries with banana and dates."),
        meal("Idli with Sambar and Coconut Chutney", vec![
            item("Idli (rice cakes)", "4 pieces", 160.0, 4.0, 34.0, 1.0),
            item("Sambar (lentil stew)", "1 cup", 120.0, 6.0, 20.0, 2.0),
            item("Coconut chutney", "3 tbsp", 90.0, 1.0, 5.0, 8.0),
            item("Roasted chana", "30g", 130.0, 8.0, 18.0, 2.0),
        ],
        "Steam idlis for 10-12 minutes. Prepare sambar with mixed vegetables and dal. Grind coconut chutney with green chilies. Serve hot with roasted chana on the side.",
        "Replace idli with dosa. Add a side of paneer for more protein."),
    ]);

    meals.insert(MealTime::Lunch, vec![
        meal("Rajma Rice Bowl", vec![
            item("Rajma (kidney beans)", "1 cup", 225.0, 15.0, 40.0, 1.0),
            item("Brown rice", "1 cup cooked", 215.0, 5.0, 45.0, 2.0),
            item("Mixed vegetable salad", "1 cup", 50.0, 2.0, 10.0, 0.0),
            item("Curd (yogurt)", "1/2 cup", 60.0, 4.0, 6.0, 2.0),
        ],
        "Pressure cook rajma with onions, tomatoes, ginger-garlic and spices. Simmer until a thick gravy forms. Serve with steamed brown rice, salad and curd.",
        "Substitute rajma with chole (chickpeas). Use quinoa instead of rice for more protein."),
        meal("Paneer Tikka with Quinoa", vec![
            item("Grilled paneer tikka", "200g", 360.0, 28.0, 8.0, 24.0),
            item("Quinoa", "1 cup cooked", 220.0, 8.0, 40.0, 4.0),
            item("Mint chutney", "2 tbsp", 20.0, 1.0, 4.0, 0.0),
            item("Grilled vegetables", "1 cup", 70.0, 2.0, 12.0, 2.0),
        ],
        "Marinate paneer cubes in yogurt, spices and lemon juice. Grill until charred. Serve with quinoa, grilled vegetables and mint chutney.",
        "Use tofu instead of paneer. Replace quinoa with brown rice or millet."),
        meal("Dal Tadka with Roti", vec![
            item("Mixed dal (toor, moong)", "1 cup", 200.0, 14.0, 34.0, 1.0),
            item("Whole wheat roti", "3 pieces", 240.0, 9.0, 45.0, 3.0),
            item("Vegetable sabzi", "1 cup", 100.0, 3.0, 15.0, 4.0),
            item("Green salad", "1 cup", 30.0, 1.0, 6.0, 0.0),
        ],
        "Pressure cook dal with turmeric and salt. Prepare a tadka with ghee, cumin, garlic and chilies and pour over the dal. Serve with rotis, sabzi and fresh salad.",
        "Use multigrain rotis. Add a side of paneer bhurji for more protein."),
        meal("Chickpea Buddha Bowl", vec![
            item("Roasted chickpeas", "1 cup", 270.0, 14.0, 45.0, 4.0),
            item("Brown rice", "1/2 cup cooked", 108.0, 2.5, 22.0, 1.0),
            item("Roasted vegetables", "1 cup", 100.0, 3.0, 18.0, 3.0),
            item("Tahini dressing", "2 tbsp", 90.0, 3.0, 3.0, 8.0),
            item("Avocado slices", "1/4 avocado", 60.0, 1.0, 3.0, 5.0),
        ],
        "Roast chickpeas with spices until crispy. Build the bowl on a rice base with roasted vegetables, chickpeas and avocado. Drizzle with tahini dressing.",
        "Use quinoa instead of rice. Replace chickpeas with black beans or lentils."),
        meal("Chole with Kulcha", vec![
            item("Chole (chickpeas)", "1 cup", 210.0, 12.0, 35.0, 3.0),
            item("Kulcha (leavened bread)", "2 pieces", 280.0, 8.0, 52.0, 4.0),
            item("Onion salad", "1 cup", 40.0, 1.0, 9.0, 0.0),
            item("Pickle", "1 tbsp", 20.0, 0.0, 3.0, 1.0),
        ],
        "Cook chickpeas with onions, tomatoes and chole masala. Simmer until thick. Serve with warm kulcha, onion salad and pickle.",
        "Replace kulcha with whole wheat naan or roti. Add a side of paneer for more protein."),
    ]);

    meals.insert(MealTime::Dinner, vec![
        meal("Vegetable Khichdi", vec![
            item("Rice and moong dal mix", "1 cup cooked", 220.0, 10.0, 42.0, 1.0),
            item("Mixed vegetables", "1 cup", 60.0, 2.0, 12.0, 0.0),
            item("Ghee", "1 tsp", 45.0, 0.0, 0.0, 5.0),
            item("Cucumber raita", "1/2 cup", 50.0, 3.0, 6.0, 2.0),
        ],
        "Pressure cook rice, moong dal and vegetables with turmeric, cumin and salt. Temper with ghee and cumin seeds. Serve with cucumber raita.",
        "Add paneer cubes for more protein. Use millet instead of rice for variation."),
        meal("Grilled Tofu with Roasted Vegetables", vec![
            item("Marinated grilled tofu", "200g", 180.0, 20.0, 4.0, 10.0),
            item("Roasted vegetables", "2 cups", 150.0, 4.0, 25.0, 5.0),
            item("Quinoa", "1/2 cup cooked", 110.0, 4.0, 20.0, 2.0),
            item("Olive oil", "1 tsp", 40.0, 0.0, 0.0, 5.0),
        ],
        "Marinate tofu in soy sauce, garlic and spices and grill until golden. Roast mixed vegetables with olive oil. Serve with quinoa.",
        "Replace tofu with paneer. Use brown rice or cauliflower rice instead of quinoa."),
        meal("Palak Dal with Roti", vec![
            item("Spinach dal", "1 cup", 180.0, 12.0, 28.0, 2.0),
            item("Whole wheat roti", "2 pieces", 160.0, 6.0, 30.0, 2.0),
            item("Vegetable salad", "1 cup", 40.0, 2.0, 8.0, 0.0),
            item("Lemon wedge", "1 piece", 5.0, 0.0, 1.0, 0.0),
        ],
        "Cook toor dal with spinach, tomatoes and turmeric. Temper with cumin and garlic. Serve with rotis and salad.",
        "Use methi (fenugreek) instead of spinach. Add a side of paneer for more protein."),
        meal("Mixed Vegetable Soup with Whole Grain Bread", vec![
            item("Thick vegetable soup", "2 cups", 150.0, 6.0, 28.0, 2.0),
            item("Whole grain bread", "2 slices", 160.0, 8.0, 28.0, 2.0),
            item("Grilled paneer", "50g", 90.0, 7.0, 2.0, 6.0),
            item("Mixed salad", "1 cup", 40.0, 2.0, 8.0, 0.0),
        ],
        "Simmer carrots, beans, tomatoes and lentils into a soup and blend partially for thickness. Serve with toasted bread, grilled paneer and salad.",
        "Make it creamy with cashew paste. Add more beans for protein."),
        meal("Vegetable Pulao with Raita", vec![
            item("Vegetable pulao", "1 cup", 240.0, 6.0, 45.0, 4.0),
            item("Mixed dal", "1/2 cup", 100.0, 7.0, 17.0, 0.5),
            item("Boondi raita", "1/2 cup", 80.0, 3.0, 10.0, 3.0),
            item("Papad", "1 piece", 30.0, 1.0, 5.0, 1.0),
        ],
        "Cook basmati rice with mixed vegetables and whole spices. Serve with dal, raita and roasted papad.",
        "Use brown rice for more fiber. Add paneer or soya chunks for a protein boost."),
    ]);

    meals.insert(MealTime::Snack, vec![
        meal("Roasted Chana Mix", vec![
            item("Roasted chana", "50g", 180.0, 10.0, 27.0, 3.0),
            item("Mixed nuts", "20g", 120.0, 4.0, 4.0, 10.0),
            item("Apple", "1 medium", 95.0, 0.0, 25.0, 0.0),
        ],
        "Mix roasted chana with nuts and sprinkle chaat masala. Enjoy with apple slices.",
        "Replace chana with makhana. Add dates for natural sweetness."),
        meal("Greek Yogurt Parfait", vec![
            item("Greek yogurt", "200g", 200.0, 20.0, 10.0, 10.0),
            item("Mixed berries", "1/2 cup", 35.0, 0.5, 8.0, 0.0),
            item("Granola", "30g", 130.0, 3.0, 20.0, 5.0),
            item("Honey", "1 tsp", 20.0, 0.0, 6.0, 0.0),
        ],
        "Layer Greek yogurt with berries and granola. Drizzle honey on top.",
        "Use homemade yogurt. Replace granola with chopped nuts and seeds."),
        meal("Paneer Tikka Bites", vec![
            item("Grilled paneer cubes", "100g", 180.0, 14.0, 3.0, 12.0),
            item("Bell peppers", "1/2 cup", 25.0, 1.0, 6.0, 0.0),
            item("Mint chutney", "2 tbsp", 20.0, 1.0, 4.0, 0.0),
        ],
        "Marinate paneer cubes in yogurt and spices. Grill with bell peppers and serve with mint chutney.",
        "Use tofu instead of paneer. Add cherry tomatoes for variety."),
        meal("Protein Smoothie", vec![
            item("Banana", "1 medium", 105.0, 1.0, 27.0, 0.0),
            item("Protein powder", "1 scoop", 120.0, 24.0, 3.0, 2.0),
            item("Almond milk", "1 cup", 40.0, 1.0, 2.0, 3.0),
            item("Peanut butter", "1 tbsp", 95.0, 4.0, 3.0, 8.0),
            item("Oats", "2 tbsp", 60.0, 2.0, 11.0, 1.0),
        ],
        "Blend all ingredients until smooth. Serve immediately.",
        "Use berries instead of banana. Replace almond milk with soy milk for more protein."),
        meal("Sprouts Chaat", vec![
            item("Mixed sprouts", "1 cup", 120.0, 10.0, 20.0, 1.0),
            item("Chopped vegetables", "1/2 cup", 25.0, 1.0, 5.0, 0.0),
            item("Lemon juice", "1 tbsp", 5.0, 0.0, 1.0, 0.0),
            item("Roasted peanuts", "20g", 115.0, 5.0, 3.0, 10.0),
        ],
        "Toss boiled sprouts with chopped onions, tomatoes and cucumber. Add chaat masala, lemon juice and peanuts.",
        "Add pomegranate seeds for sweetness. Use boiled chana instead of sprouts."),
    ]);

    meals
}

// ============================================================================
// Exercise libraries
// ============================================================================

fn reps(name: &str, sets: u32, count: u32, rest: u32, equipment: Equipment, intensity: Intensity, instructions: &str) -> ExerciseTemplate {
    ExerciseTemplate {
        name: name.to_string(),
        sets: Some(sets),
        reps: Some(Reps::Count(count)),
        duration_minutes: None,
        rest_seconds: Some(rest),
        equipment,
        instructions: instructions.to_string(),
        intensity,
    }
}

fn hold(name: &str, sets: u32, length: &str, rest: u32, equipment: Equipment, intensity: Intensity, instructions: &str) -> ExerciseTemplate {
    ExerciseTemplate {
        reps: Some(Reps::text(length)),
        ..reps(name, sets, 0, rest, equipment, intensity, instructions)
    }
}

fn timed(name: &str, sets: u32, minutes: u32, rest: u32, equipment: Equipment, intensity: Intensity, instructions: &str) -> ExerciseTemplate {
    ExerciseTemplate {
        reps: None,
        duration_minutes: Some(minutes),
        ..reps(name, sets, 0, rest, equipment, intensity, instructions)
    }
}

fn workout_libraries() -> BTreeMap<WorkoutType, Vec<ExerciseTemplate>> {
    let mut libraries = BTreeMap::new();

    libraries.insert(WorkoutType::Gym, vec![
        reps("Barbell Bench Press", 4, 10, 90, Eq::Barbell, Moderate, "Lower bar to chest, press up explosively"),
        reps("Barbell Squats", 4, 12, 90, Eq::Barbell, Hard, "Depth to parallel, drive through heels"),
        reps("Deadlifts", 4, 8, 120, Eq::Barbell, Hard, "Keep back straight, hinge at hips"),
        reps("Lat Pulldowns", 3, 12, 60, Eq::Machine, Moderate, "Pull to upper chest, squeeze shoulder blades"),
        reps("Cable Rows", 3, 12, 60, Eq::CableMachine, Moderate, "Pull to abdomen, keep torso stable"),
        reps("Leg Press", 3, 15, 60, Eq::LegPress, Moderate, "Full range of motion, controlled descent"),
        reps("Dumbbell Shoulder Press", 3, 10, 60, Eq::Dumbbell, Moderate, "Press overhead, controlled descent"),
        reps("Tricep Dips", 3, 12, 45, Eq::DipBar, Moderate, "Lower until upper arms parallel to ground"),
        reps("Barbell Curls", 3, 12, 45, Eq::Barbell, Easy, "Curl to shoulders, no swinging"),
        reps("Leg Curls", 3, 12, 45, Eq::Machine, Easy, "Curl heels to glutes, squeeze at top"),
    ]);

    libraries.insert(WorkoutType::Home, vec![
        reps("Push-ups", 3, 15, 45, Eq::None, Moderate, "Body in straight line, chest to ground"),
        reps("Bodyweight Squats", 3, 20, 45, Eq::None, Easy, "Sit back, knees over toes"),
        reps("Lunges", 3, 12, 45, Eq::None, Moderate, "Step forward, both knees at 90 degrees"),
        hold("Plank", 3, "60 seconds", 45, Eq::None, Moderate, "Hold straight line from head to heels"),
        reps("Mountain Climbers", 3, 20, 30, Eq::None, Hard, "Drive knees to chest alternately"),
        reps("Burpees", 3, 10, 60, Eq::None, Hard, "Jump back, push-up, jump up"),
        reps("Glute Bridges", 3, 15, 30, Eq::None, Easy, "Lift hips, squeeze glutes at top"),
        reps("Tricep Dips (Chair)", 3, 12, 45, Eq::Chair, Moderate, "Use chair or bench, lower body"),
        hold("Wall Sit", 3, "45 seconds", 45, Eq::None, Moderate, "Back against wall, thighs parallel to ground"),
        hold("Superman Hold", 3, "30 seconds", 30, Eq::None, Moderate, "Lift arms and legs simultaneously"),
    ]);

    libraries.insert(WorkoutType::Cardio, vec![
        timed("Running Intervals", 1, 10, 0, Eq::None, Hard, "2 min moderate, 1 min sprint, repeat"),
        timed("Jump Rope", 4, 3, 60, Eq::JumpRope, Moderate, "Maintain steady rhythm, light on feet"),
        reps("High Knees", 4, 30, 30, Eq::None, Hard, "Drive knees to hip level, fast pace"),
        reps("Burpees", 4, 15, 45, Eq::None, Hard, "Full range, jump explosively"),
        reps("Box Jumps", 4, 12, 60, Eq::Box, Hard, "Jump onto stable surface, land softly"),
        reps("Mountain Climbers", 4, 40, 30, Eq::None, Hard, "Fast alternating knees to chest"),
        reps("Jumping Jacks", 4, 50, 30, Eq::None, Moderate, "Full arm extension overhead"),
        timed("Shadow Boxing", 4, 3, 45, Eq::None, Moderate, "Punches with footwork, stay light"),
        timed("Stair Climbing", 1, 15, 0, Eq::None, Moderate, "Continuous climb, steady pace"),
        reps("Bicycle Crunches", 4, 30, 30, Eq::None, Moderate, "Alternate elbow to opposite knee"),
    ]);

    libraries.insert(WorkoutType::Strength, vec![
        reps("Push-ups", 4, 15, 60, Eq::None, Moderate, "Full range, body straight"),
        reps("Pull-ups", 4, 8, 90, Eq::PullupBar, Hard, "Chin over bar, controlled descent"),
        reps("Dumbbell Rows", 4, 12, 60, Eq::Dumbbell, Moderate, "Pull to hip, squeeze back"),
        reps("Goblet Squats", 4, 15, 60, Eq::Dumbbell, Moderate, "Hold weight at chest, squat deep"),
        reps("Romanian Deadlifts", 4, 12, 60, Eq::Dumbbell, Moderate, "Hinge at hips, feel hamstring stretch"),
        reps("Overhead Press", 4, 10, 60, Eq::Dumbbell, Moderate, "Press weight overhead, lock out"),
        reps("Dumbbell Chest Press", 4, 12, 60, Eq::Dumbbell, Moderate, "Press up and together, squeeze chest"),
        reps("Walking Lunges", 3, 20, 45, Eq::Dumbbell, Moderate, "Step forward with weights, alternate legs"),
        reps("Plank to Push-up", 3, 10, 45, Eq::None, Hard, "Alternate from plank to push-up position"),
        timed("Farmer's Carry", 3, 2, 60, Eq::Dumbbell, Moderate, "Walk with heavy weights, upright posture"),
    ]);

    libraries
}

/// Focus-library entries carry a neutral baseline; the focus generator
/// replaces the prescription with the level's rep range.
fn focus_move(name: &str, equipment: Equipment, tips: &str) -> (String, Equipment, String) {
    (name.to_string(), equipment, tips.to_string())
}

fn focus_libraries() -> BTreeMap<(FitnessLevel, FocusArea), Vec<ExerciseTemplate>> {
    use FitnessLevel::{Advanced, Beginner, Intermediate};
    use FocusArea::{Core, FullBody, Lower, Upper};

    let raw: Vec<((FitnessLevel, FocusArea), Vec<(String, Equipment, String)>)> = vec![
        ((Beginner, FullBody), vec![
            focus_move("Bodyweight Squats", Eq::None, "Keep your back straight and knees behind toes. Focus on controlled movements."),
            focus_move("Knee Push-ups", Eq::None, "Keep your core engaged and lower yourself slowly. Maintain a straight line from knees to head."),
            focus_move("Plank", Eq::None, "Keep your body in a straight line from head to heels. Engage your core throughout."),
            focus_move("Walking Lunges", Eq::None, "Step forward and lower your hips until both knees are bent at 90 degrees."),
            focus_move("Glute Bridges", Eq::None, "Squeeze your glutes at the top and keep your core tight. Push through your heels."),
        ]),
        ((Beginner, Upper), vec![
            focus_move("Wall Push-ups", Eq::None, "Stand arm's length from the wall, lean in and push back. Keep body straight."),
            focus_move("Arm Circles", Eq::None, "Extend arms to sides and make small circles. Gradually increase size."),
            focus_move("Shoulder Taps", Eq::None, "In plank position, tap the opposite shoulder while keeping hips stable."),
            focus_move("Tricep Dips (Chair)", Eq::Chair, "Keep elbows close to body and lower yourself slowly."),
        ]),
        ((Beginner, Lower), vec![
            focus_move("Bodyweight Squats", Eq::None, "Keep chest up and weight in heels. Go as low as comfortable."),
            focus_move("Calf Raises", Eq::None, "Rise up on toes, hold briefly, then lower slowly."),
            focus_move("Side Leg Raises", Eq::None, "Keep leg straight and lift to the side without leaning."),
            focus_move("Step-ups", Eq::Chair, "Step fully onto the chair or box and drive through the heel."),
        ]),
        ((Beginner, Core), vec![
            focus_move("Basic Crunches", Eq::None, "Keep lower back pressed to floor. Lift shoulders off ground."),
            focus_move("Plank", Eq::None, "Hold body in a straight line. Don't let hips sag."),
            focus_move("Dead Bug", Eq::None, "Keep lower back pressed to floor while moving limbs."),
            focus_move("Bird Dog", Eq::None, "Extend opposite arm and leg while maintaining balance."),
        ]),
        ((Intermediate, FullBody), vec![
            focus_move("Goblet Squats", Eq::Dumbbell, "Hold weight at chest level. Keep elbows inside knees."),
            focus_move("Standard Push-ups", Eq::None, "Lower chest to ground with elbows at 45 degrees. Keep core tight."),
            focus_move("Dumbbell Rows", Eq::Dumbbell, "Pull weight to hip, keeping elbow close to body."),
            focus_move("Overhead Press", Eq::Dumbbell, "Press weights overhead without arching back excessively."),
            focus_move("Romanian Deadlifts", Eq::Dumbbell, "Hinge at hips, keep back straight, feel stretch in hamstrings."),
        ]),
        ((Intermediate, Upper), vec![
            focus_move("Dumbbell Bench Press", Eq::Dumbbell, "Lower weights to chest level, press up explosively."),
            focus_move("Assisted Pull-ups", Eq::PullupBar, "Focus on pulling with back muscles, not just arms."),
            focus_move("Parallel Bar Dips", Eq::DipBar, "Lower until upper arms are parallel to ground."),
            focus_move("Dumbbell Shoulder Press", Eq::Dumbbell, "Press weights overhead in controlled motion."),
            focus_move("Dumbbell Bicep Curls", Eq::Dumbbell, "Keep elbows stationary, curl weights to shoulders."),
        ]),
        ((Intermediate, Lower), vec![
            focus_move("Goblet Squats", Eq::Dumbbell, "Hold dumbbell at chest, squat deep with good form."),
            focus_move("Bulgarian Split Squats", Eq::Dumbbell, "Rear foot elevated, lower front knee to 90 degrees."),
            focus_move("Dumbbell Lunges", Eq::Dumbbell, "Hold weights at sides, step forward into lunge."),
            focus_move("Single Leg Deadlifts", Eq::Dumbbell, "Balance on one leg, hinge at hip with straight back."),
        ]),
        ((Intermediate, Core), vec![
            focus_move("Russian Twists", Eq::Dumbbell, "Rotate torso side to side while keeping feet elevated."),
            focus_move("Mountain Climbers", Eq::None, "Drive knees to chest rapidly while in plank position."),
            focus_move("Leg Raises", Eq::None, "Keep lower back pressed down, raise legs slowly."),
            focus_move("Bicycle Crunches", Eq::None, "Rotate torso to bring elbow to opposite knee."),
        ]),
        ((Advanced, FullBody), vec![
            focus_move("Barbell Squats", Eq::Barbell, "Bar on upper back, squat below parallel with controlled form."),
            focus_move("Barbell Deadlifts", Eq::Barbell, "Lift with legs first, keep bar close to body throughout."),
            focus_move("Barbell Bench Press", Eq::Barbell, "Lower bar to chest, press up explosively, maintain arch."),
            focus_move("Pull-ups", Eq::PullupBar, "Full range of motion, chin over bar, control the descent."),
            focus_move("Barbell Overhead Press", Eq::Barbell, "Press from shoulders to overhead, engage core for stability."),
        ]),
        ((Advanced, Upper), vec![
            focus_move("Weighted Pull-ups", Eq::PullupBar, "Add weight via belt, maintain strict form throughout."),
            focus_move("Barbell Bench Press", Eq::Barbell, "Control the bar down, explosive press up."),
            focus_move("Weighted Dips", Eq::DipBar, "Add weight, lower to full depth, press up powerfully."),
            focus_move("Barbell Rows", Eq::Barbell, "Pull bar to lower chest, squeeze shoulder blades together."),
            focus_move("Overhead Press", Eq::Barbell, "Strict press from shoulders, no leg drive."),
        ]),
        ((Advanced, Lower), vec![
            focus_move("Barbell Back Squats", Eq::Barbell, "Bar high on traps, squat to depth, drive up through heels."),
            focus_move("Barbell Deadlifts", Eq::Barbell, "Hip hinge pattern, explosive pull, control the descent."),
            focus_move("Bulgarian Split Squats", Eq::Barbell, "Heavy load, rear foot elevated, focus on front leg."),
            focus_move("Leg Press", Eq::LegPress, "Full range of motion, push through heels, control the weight."),
            focus_move("Weighted Calf Raises", Eq::Barbell, "Full extension at top, stretch at bottom."),
        ]),
        ((Advanced, Core), vec![
            focus_move("Hanging Leg Raises", Eq::PullupBar, "Raise legs to parallel or higher, control the swing."),
            focus_move("Ab Wheel Rollouts", Eq::AbWheel, "Roll out slowly, maintain tension in core throughout."),
            focus_move("Weighted Russian Twists", Eq::Dumbbell, "Heavy weight, explosive rotation, maintain form."),
            focus_move("Dragon Flags", Eq::Bench, "Advanced movement, keep body straight, lower with control."),
        ]),
    ];

    raw.into_iter()
        .map(|((level, focus), moves)| {
            let intensity = match level {
                Beginner => Easy,
                Intermediate => Moderate,
                Advanced => Hard,
            };
            let templates = moves
                .into_iter()
                .map(|(name, equipment, tips)| {
                    let is_hold = name.to_lowercase().contains("plank");
                    ExerciseTemplate {
                        reps: Some(if is_hold { Reps::text("30 seconds") } else { Reps::Count(12) }),
                        sets: Some(3),
                        duration_minutes: None,
                        rest_seconds: Some(45),
                        equipment,
                        instructions: tips,
                        intensity,
                        name,
                    }
                })
                .collect();
            ((level, focus), templates)
        })
        .collect()
}

// ============================================================================
// Warm-up and cool-down pools
// ============================================================================

fn micro(name: &str, minutes: u32, intensity: Intensity, instructions: &str) -> MicroExercise {
    MicroExercise {
        name: name.to_string(),
        minutes,
        instructions: instructions.to_string(),
        intensity,
    }
}

fn warmups() -> Vec<MicroExercise> {
    vec![
        micro("Jumping Jacks", 2, Easy, "Keep movements controlled, land softly"),
        micro("Arm Circles", 1, Easy, "Forward and backward, gradually increase range"),
        micro("Leg Swings", 2, Easy, "Front to back, then side to side"),
        micro("Hip Circles", 1, Easy, "Clockwise and counter-clockwise"),
        micro("High Knees", 2, Moderate, "Bring knees to hip level, pump arms"),
        micro("Butt Kicks", 2, Moderate, "Kick heels to glutes, stay on balls of feet"),
        micro("Torso Twists", 1, Easy, "Rotate from core, keep hips stable"),
        micro("Shoulder Rolls", 1, Easy, "Forward and backward, full range of motion"),
        micro("Walking Lunges", 2, Moderate, "Step forward, knee at 90 degrees"),
        micro("Cat-Cow Stretch", 1, Easy, "Alternate arching and rounding spine"),
    ]
}

fn cooldowns() -> Vec<MicroExercise> {
    vec![
        micro("Standing Quad Stretch", 1, Easy, "Hold each leg, keep knees together"),
        micro("Hamstring Stretch", 1, Easy, "Reach for toes, keep back straight"),
        micro("Chest Stretch", 1, Easy, "Clasp hands behind back, lift chest"),
        micro("Shoulder Stretch", 1, Easy, "Pull arm across body, hold"),
        micro("Tricep Stretch", 1, Easy, "Reach arm overhead, pull elbow"),
        micro("Hip Flexor Stretch", 1, Easy, "Lunge position, push hips forward"),
        micro("Spinal Twist", 1, Easy, "Seated or lying, rotate spine gently"),
        micro("Child's Pose", 2, Easy, "Sit back on heels, arms extended forward"),
        micro("Deep Breathing", 2, Easy, "Inhale 4 counts, hold 4, exhale 6"),
        micro("Calf Stretch", 1, Easy, "Push against wall, heel down"),
    ]
}

// ============================================================================
// Exclusion tables
// ============================================================================

fn exclusion_rules() -> ExclusionRules {
    // Groups first, then every ingredient in the meal catalog under its
    // singular and plural spellings
    let allergies = ExclusionSet::new()
        .with_rule("dairy", &["paneer", "yogurt", "curd", "ghee", "raita", "milk", "cheese"])
        .with_rule("lactose", &["paneer", "yogurt", "curd", "raita", "milk", "cheese"])
        .with_rule("nuts", &["peanut", "almond", "cashew", "nuts", "walnut"])
        .with_rule("tree nuts", &["almond", "cashew", "walnut", "mixed nuts"])
        .with_rule("gluten", &["wheat", "roti", "bread", "toast", "kulcha", "granola", "oats", "papad"])
        .with_rule("soy", &["tofu", "soy"])
        .with_rule("sesame", &["tahini", "sesame"])
        .with_rule("legumes", &["dal", "chana", "chickpea", "rajma", "chole", "sprouts", "peanut", "lentil"])
        // nuts and seeds
        .with_rules(&["peanut", "peanuts"], &["peanut"])
        .with_rules(&["almond", "almonds"], &["almond"])
        .with_rules(&["cashew", "cashews"], &["cashew", "mixed nuts"])
        .with_rules(&["walnut", "walnuts"], &["walnut", "mixed nuts"])
        .with_rules(&["tahini"], &["tahini"])
        // dairy
        .with_rules(&["milk"], &["milk", "paneer", "yogurt", "curd", "raita", "ghee"])
        .with_rules(&["paneer"], &["paneer"])
        .with_rules(&["yogurt", "yoghurt", "curd"], &["yogurt", "curd", "raita"])
        .with_rules(&["cheese"], &["cheese", "paneer"])
        .with_rules(&["ghee"], &["ghee"])
        .with_rules(&["whey", "protein powder"], &["protein powder"])
        // grains
        .with_rules(&["wheat"], &["wheat", "roti", "kulcha", "bread", "toast"])
        .with_rules(&["bread", "breads"], &["bread", "toast", "kulcha"])
        .with_rules(&["roti", "rotis"], &["roti"])
        .with_rules(&["oat", "oats"], &["oats", "granola"])
        .with_rules(&["granola"], &["granola"])
        .with_rules(&["rice"], &["rice", "idli", "poha", "pulao"])
        .with_rules(&["poha"], &["poha"])
        .with_rules(&["idli", "idlis"], &["idli"])
        .with_rules(&["quinoa"], &["quinoa"])
        // legumes and soy
        .with_rules(&["tofu"], &["tofu"])
        .with_rules(&["chickpea", "chickpeas", "chana", "chole"], &["chickpea", "chana", "chole"])
        .with_rules(&["lentil", "lentils", "dal", "dals"], &["lentil", "dal", "sambar"])
        .with_rules(&["moong", "mung"], &["moong"])
        .with_rules(&["rajma", "kidney bean", "kidney beans", "beans"], &["rajma", "kidney beans"])
        .with_rules(&["sprout", "sprouts"], &["sprouts"])
        // fruit and vegetables
        .with_rules(&["coconut", "coconuts"], &["coconut"])
        .with_rules(&["banana", "bananas"], &["banana"])
        .with_rules(&["avocado", "avocados"], &["avocado"])
        .with_rules(&["apple", "apples"], &["apple"])
        .with_rules(&["berry", "berries"], &["berries"])
        .with_rules(&["lemon", "lemons", "citrus"], &["lemon"])
        .with_rules(&["tomato", "tomatoes"], &["tomato"])
        .with_rules(&["onion", "onions"], &["onion"])
        .with_rules(&["bell pepper", "bell peppers", "pepper", "peppers"], &["pepper"])
        .with_rules(&["cucumber", "cucumbers"], &["cucumber"])
        .with_rules(&["spinach"], &["spinach"])
        .with_rules(&["mint"], &["mint"])
        // other
        .with_rules(&["honey"], &["honey"])
        .with_rules(&["olive", "olives", "olive oil"], &["olive"])
        .with_rules(&["pickle", "pickles"], &["pickle"])
        .with_rules(&["papad"], &["papad"]);

    let warmup_injuries = ExclusionSet::new()
        .with_rule("knee", &["high knees", "butt kicks", "walking lunges"])
        .with_rule("shoulder", &["arm circles", "shoulder rolls"])
        .with_rule("back", &["cat-cow stretch", "torso twists"]);

    let cooldown_injuries = ExclusionSet::new()
        .with_rule("knee", &["standing quad stretch", "hip flexor stretch"])
        .with_rule("shoulder", &["chest stretch", "shoulder stretch", "tricep stretch"])
        .with_rule("back", &["spinal twist", "child's pose"]);

    let main_injuries = ExclusionSet::new()
        .with_rule("knee", &["squats", "lunges", "box jumps", "leg press"])
        .with_rule("shoulder", &["press", "pull-ups", "overhead"])
        .with_rule("back", &["deadlifts", "rows", "romanian"])
        .with_rule("wrist", &["push-ups", "plank"]);

    let focus_injuries = ExclusionSet::new()
        .with_rule("knee", &["squats", "lunges", "leg press"])
        .with_rule("shoulder", &["push-ups", "press", "pull-ups", "dips"])
        .with_rule("back", &["deadlifts", "rows", "squats"])
        .with_rule("wrist", &["push-ups", "plank", "dips"]);

    ExclusionRules {
        allergies,
        warmup_injuries,
        cooldown_injuries,
        main_injuries,
        focus_injuries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_focus_cell_is_populated() {
        let focus = focus_libraries();
        for level in FitnessLevel::ALL {
            for area in FocusArea::ALL {
                assert!(!focus[&(level, area)].is_empty(), "{:?} {:?}", level, area);
            }
        }
    }

    #[test]
    fn test_focus_planks_are_timed_holds() {
        let focus = focus_libraries();
        let plank = focus[&(FitnessLevel::Beginner, FocusArea::Core)]
            .iter()
            .find(|e| e.name == "Plank")
            .unwrap();
        assert_eq!(plank.reps, Some(Reps::text("30 seconds")));
        assert_eq!(plank.intensity, Easy);
    }

    #[test]
    fn test_cardio_timed_entries() {
        let libraries = workout_libraries();
        let intervals = &libraries[&WorkoutType::Cardio][0];
        assert_eq!(intervals.name, "Running Intervals");
        assert_eq!(intervals.duration_minutes, Some(10));
        assert_eq!(intervals.reps, None);
        assert_eq!(intervals.rest_seconds, Some(0));
    }
}
