//! Utility to print a generated plan without starting the MCP server
//!
//! Usage:
//!   sample_plan workout <type> <minutes> <level> [seed]
//!   sample_plan meal <meal_time> <calories> <protein> <carbs> <fats> [seed]
//!   sample_plan day [meal_time] [seed]
//!   sample_plan focus <type> <focus_area> <level> <minutes>

use rand::rngs::StdRng;
use rand::SeedableRng;

use fitplan::catalog::Catalog;
use fitplan::planner;
use fitplan::tools::validation;

const USAGE: &str = "usage:
  sample_plan workout <type> <minutes> <level> [seed]
  sample_plan meal <meal_time> <calories> <protein> <carbs> <fats> [seed]
  sample_plan day [meal_time] [seed]
  sample_plan focus <type> <focus_area> <level> <minutes>";

fn rng_from(arg: Option<&String>) -> Result<StdRng, Box<dyn std::error::Error>> {
    Ok(match arg {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let catalog = Catalog::builtin()?;

    let json = match args.first().map(String::as_str) {
        Some("workout") if args.len() >= 4 => {
            let request = validation::workout_request(
                &args[1],
                args[2].parse()?,
                &args[3],
                Some("barbell, dumbbells, cable machine"),
                None,
                "general fitness",
            )?;
            let mut rng = rng_from(args.get(4))?;
            serde_json::to_string_pretty(&planner::generate_workout(&catalog, &request, &mut rng))?
        }
        Some("meal") if args.len() >= 6 => {
            let request = validation::meal_request(
                &args[1],
                args[2].parse()?,
                args[3].parse()?,
                args[4].parse()?,
                args[5].parse()?,
                None,
                "general fitness",
            )?;
            let mut rng = rng_from(args.get(6))?;
            match planner::generate_meal(&catalog, &request, &mut rng) {
                Some(meal) => serde_json::to_string_pretty(&meal)?,
                None => return Err(format!("no templates for {}", args[1]).into()),
            }
        }
        Some("day") => {
            // A lone numeric argument is the seed
            let (meal_time, seed) = match args.get(1) {
                Some(a) if a.parse::<u64>().is_ok() => (None, args.get(1)),
                other => (other.map(String::as_str), args.get(2)),
            };
            let request = validation::day_plan_request(meal_time, None)?;
            let mut rng = rng_from(seed)?;
            serde_json::to_string_pretty(&planner::generate_day_plan(&catalog, &request, &mut rng))?
        }
        Some("focus") if args.len() >= 5 => {
            let request = validation::focus_workout_request(
                &args[1],
                &args[2],
                &args[3],
                args[4].parse()?,
                &[],
                None,
            )?;
            serde_json::to_string_pretty(&planner::generate_focus_workout(&catalog, &request))?
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    println!("{}", json);
    Ok(())
}
