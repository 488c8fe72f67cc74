//! FitPlan
//!
//! An MCP server for vegetarian meal and workout plan generation.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use fitplan::build_info;
use fitplan::catalog::Catalog;
use fitplan::config::Config;
use fitplan::db::Database;
use fitplan::mcp::FitplanService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = Config::from_env()?;
    eprintln!("Database path: {}", config.database_path.display());

    // Creates the data directory and runs migrations
    let database = Database::open_and_migrate(&config.database_path)?;

    let catalog = Catalog::builtin()?;
    let summary = catalog.summary();
    tracing::info!(
        meal_templates = summary.meal_templates.values().sum::<usize>(),
        focus_exercises = summary.focus_exercises,
        warmups = summary.warmups,
        cooldowns = summary.cooldowns,
        "catalog loaded"
    );

    let rng = match config.rng_seed {
        Some(seed) => {
            eprintln!("Plan sampling seeded with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let service = FitplanService::new(
        config.database_path.clone(),
        database,
        Arc::new(catalog),
        rng,
        config.rng_seed.is_some(),
    );

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
