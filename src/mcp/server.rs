//! FitPlan MCP Server Implementation
//!
//! Implements the MCP server with all FitPlan tools.

use std::path::PathBuf;
use std::sync::Arc;

use rand::rngs::StdRng;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::db::Database;
use crate::tools::history;
use crate::tools::plans;
use crate::tools::status::StatusTracker;
use crate::tools::validation::{self, ValidationError};

/// FitPlan MCP Service
#[derive(Clone)]
pub struct FitplanService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    catalog: Arc<Catalog>,
    /// Shared sampling source, locked for one generation at a time
    rng: Arc<std::sync::Mutex<StdRng>>,
    tool_router: ToolRouter<FitplanService>,
}

impl FitplanService {
    pub fn new(
        database_path: PathBuf,
        database: Database,
        catalog: Arc<Catalog>,
        rng: StdRng,
        seeded: bool,
    ) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path, seeded))),
            database,
            catalog,
            rng: Arc::new(std::sync::Mutex::new(rng)),
            tool_router: Self::tool_router(),
        }
    }
}

fn invalid(e: ValidationError) -> McpError {
    McpError::invalid_params(e.to_client_message(), None)
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Generation Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateMealParams {
    /// breakfast, lunch, dinner or snack
    pub meal_time: String,
    /// Calorie target for this meal
    pub calories: f64,
    /// Protein target in grams
    pub protein: f64,
    /// Carbohydrate target in grams
    pub carbs: f64,
    /// Fat target in grams
    pub fats: f64,
    /// Comma-separated allergy keywords (e.g., "dairy, peanut")
    pub allergies: Option<String>,
    /// Goal label (e.g., "weight loss"); informational only
    pub goal: String,
    /// Save the plan for this user
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateWorkoutParams {
    /// gym, home, cardio or strength
    pub workout_type: String,
    /// Total minutes (15-180)
    pub duration: i64,
    /// beginner, intermediate or advanced
    pub fitness_level: String,
    /// Comma-separated equipment (e.g., "barbell, dumbbells, cable machine")
    pub equipment: Option<String>,
    /// Comma-separated injuries (knee, shoulder, back, wrist)
    pub injuries: Option<String>,
    /// Goal label; informational only
    pub goal: String,
    /// Save the plan for this user
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateDayMealPlanParams {
    /// Plan only this meal time (breakfast, lunch, dinner, snack); whole day when omitted
    pub meal_time: Option<String>,
    /// Comma-separated allergy keywords
    pub allergies: Option<String>,
    /// Save the plan for this user
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateFocusWorkoutParams {
    /// gym or home
    #[serde(default = "default_focus_workout_type")]
    pub workout_type: String,
    /// full_body, upper, lower or core
    #[serde(default = "default_focus_area")]
    pub focus_area: String,
    /// beginner, intermediate or advanced
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// Minutes (10-180)
    #[serde(default = "default_focus_duration")]
    pub duration: i64,
    /// Extra equipment available at home (e.g., ["pullup_bar", "bench"])
    #[serde(default)]
    pub equipment_available: Vec<String>,
    /// Comma-separated injuries
    pub injuries: Option<String>,
    /// Save the plan for this user
    pub user_id: Option<i64>,
}

fn default_focus_workout_type() -> String { "home".to_string() }
fn default_focus_area() -> String { "full_body".to_string() }
fn default_difficulty() -> String { "beginner".to_string() }
fn default_focus_duration() -> i64 { 30 }

// ============================================================================
// Saved Plan Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListSavedPlansParams {
    pub user_id: i64,
    /// meal, workout, day_meal_plan or focus_workout
    pub plan_kind: Option<String>,
    #[serde(default = "default_list_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_list_limit() -> i64 { 20 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SavedPlanIdParams {
    /// Saved plan ID
    pub id: i64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FitplanService {
    // --- Status ---

    #[tool(description = "Get the current status of the FitPlan service including build info, database status, process information and catalog size")]
    async fn fitplan_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(&self.catalog);
        to_json(&status)
    }

    #[tool(description = "Get instructions for generating meals and workouts. Call this before the first generation in a session.")]
    fn plan_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PLAN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PLAN_INSTRUCTIONS)]))
    }

    #[tool(description = "Count the meal templates, exercises, warm-ups and cool-downs in the catalog, and list the allergy and injury keywords it understands")]
    fn catalog_summary(&self) -> Result<CallToolResult, McpError> {
        to_json(&self.catalog.summary())
    }

    // --- Generation ---

    #[tool(description = "Generate one vegetarian meal scaled toward a calorie target, with a protein top-up when short. Totals are computed from the returned items.")]
    fn generate_meal(&self, Parameters(p): Parameters<GenerateMealParams>) -> Result<CallToolResult, McpError> {
        let request = validation::meal_request(
            &p.meal_time, p.calories, p.protein, p.carbs, p.fats, p.allergies.as_deref(), &p.goal,
        )
        .map_err(invalid)?;
        let user_id = validation::user_id(p.user_id).map_err(invalid)?;

        let result = plans::generate_meal(&self.catalog, &self.database, &self.rng, &request, user_id)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Generate a workout with warm-up, main and cool-down sections that add up to the requested duration")]
    fn generate_workout(&self, Parameters(p): Parameters<GenerateWorkoutParams>) -> Result<CallToolResult, McpError> {
        let request = validation::workout_request(
            &p.workout_type, p.duration, &p.fitness_level, p.equipment.as_deref(), p.injuries.as_deref(), &p.goal,
        )
        .map_err(invalid)?;
        let user_id = validation::user_id(p.user_id).map_err(invalid)?;

        let result = plans::generate_workout(&self.catalog, &self.database, &self.rng, &request, user_id)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Generate a day of meals (breakfast, lunch, dinner, two snacks) at baseline portions, or the meals for one meal time")]
    fn generate_day_meal_plan(&self, Parameters(p): Parameters<GenerateDayMealPlanParams>) -> Result<CallToolResult, McpError> {
        let request = validation::day_plan_request(p.meal_time.as_deref(), p.allergies.as_deref()).map_err(invalid)?;
        let user_id = validation::user_id(p.user_id).map_err(invalid)?;

        let result = plans::generate_day_meal_plan(&self.catalog, &self.database, &self.rng, &request, user_id)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Generate a single-block gym or home workout for one focus area (full_body, upper, lower, core)")]
    fn generate_focus_workout(&self, Parameters(p): Parameters<GenerateFocusWorkoutParams>) -> Result<CallToolResult, McpError> {
        let request = validation::focus_workout_request(
            &p.workout_type, &p.focus_area, &p.difficulty, p.duration, &p.equipment_available, p.injuries.as_deref(),
        )
        .map_err(invalid)?;
        let user_id = validation::user_id(p.user_id).map_err(invalid)?;

        let result = plans::generate_focus_workout(&self.catalog, &self.database, &request, user_id)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Saved Plans ---

    #[tool(description = "List a user's saved plans, newest first, optionally for one plan kind")]
    fn list_saved_plans(&self, Parameters(p): Parameters<ListSavedPlansParams>) -> Result<CallToolResult, McpError> {
        let user_id = validation::user_id(Some(p.user_id)).map_err(invalid)?.unwrap_or(p.user_id);
        let kind = validation::plan_kind(p.plan_kind.as_deref()).map_err(invalid)?;

        let result = history::list_saved_plans(&self.database, user_id, kind, p.limit, p.offset)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get a saved plan with its full plan body")]
    fn get_saved_plan(&self, Parameters(p): Parameters<SavedPlanIdParams>) -> Result<CallToolResult, McpError> {
        let result = history::get_saved_plan(&self.database, p.id).map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Some(plan) => serde_json::to_string_pretty(&plan),
            None => Ok(format!(r#"{{"error": "Saved plan not found", "id": {}}}"#, p.id)),
        }
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Delete a saved plan")]
    fn delete_saved_plan(&self, Parameters(p): Parameters<SavedPlanIdParams>) -> Result<CallToolResult, McpError> {
        let result = history::delete_saved_plan(&self.database, p.id).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }
}

#[tool_handler]
impl ServerHandler for FitplanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitplan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FitPlan".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FitPlan - Vegetarian meal and workout plan generation. \
                 IMPORTANT: Call plan_instructions before generating. \
                 Meals: generate_meal (scaled to a calorie target), generate_day_meal_plan. \
                 Workouts: generate_workout (warm-up/main/cool-down), generate_focus_workout. \
                 Pass user_id to any generate tool to save the plan. \
                 Saved plans: list_saved_plans, get_saved_plan, delete_saved_plan. \
                 Info: catalog_summary, fitplan_status."
                    .into(),
            ),
        }
    }
}
