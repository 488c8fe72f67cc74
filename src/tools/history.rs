//! Saved plan tools
//!
//! Listing, fetching and deleting plans stored by the generation tools.

use serde::Serialize;

use crate::db::Database;
use crate::models::{PlanKind, SavedPlan};

// ============================================================================
// Response Structs
// ============================================================================

/// Summary for listing (plan body omitted)
#[derive(Debug, Serialize)]
pub struct SavedPlanSummary {
    pub id: i64,
    pub plan_kind: String,
    pub label: String,
    pub plan_date: String,
    pub created_at: String,
}

/// Response for list_saved_plans
#[derive(Debug, Serialize)]
pub struct ListSavedPlansResponse {
    pub user_id: i64,
    pub plans: Vec<SavedPlanSummary>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Response for delete operations
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted_id: i64,
}

// ============================================================================
// Saved Plan Tool Functions
// ============================================================================

/// List a user's saved plans, newest first
pub fn list_saved_plans(
    db: &Database,
    user_id: i64,
    kind: Option<PlanKind>,
    limit: i64,
    offset: i64,
) -> Result<ListSavedPlansResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let plans = SavedPlan::list_for_user(&conn, user_id, kind, limit, offset)
        .map_err(|e| format!("Failed to list saved plans: {}", e))?;
    let total = SavedPlan::count_for_user(&conn, user_id, kind)
        .map_err(|e| format!("Failed to count saved plans: {}", e))?;

    Ok(ListSavedPlansResponse {
        user_id,
        plans: plans
            .into_iter()
            .map(|p| SavedPlanSummary {
                id: p.id,
                plan_kind: p.plan_kind.as_str().to_string(),
                label: p.label,
                plan_date: p.plan_date,
                created_at: p.created_at,
            })
            .collect(),
        total,
        limit,
        offset,
    })
}

/// Get a saved plan with its full body
pub fn get_saved_plan(db: &Database, id: i64) -> Result<Option<SavedPlan>, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    SavedPlan::get_by_id(&conn, id).map_err(|e| format!("Failed to get saved plan: {}", e))
}

/// Delete a saved plan
pub fn delete_saved_plan(db: &Database, id: i64) -> Result<DeleteResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let deleted = SavedPlan::delete(&conn, id).map_err(|e| format!("Failed to delete saved plan: {}", e))?;
    if !deleted {
        return Err(format!("Saved plan not found: {}", id));
    }
    Ok(DeleteResponse {
        success: true,
        deleted_id: id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SavedPlanCreate;
    use tempfile::TempDir;

    fn seeded_db() -> (TempDir, Database) {
        let dir = TempDir::new().unwrap();
        let db = Database::open_and_migrate(dir.path().join("history.db")).unwrap();
        {
            let conn = db.get_conn().unwrap();
            for (kind, label) in [(PlanKind::Meal, "Sprouts Chaat"), (PlanKind::FocusWorkout, "Core")] {
                SavedPlan::create(
                    &conn,
                    &SavedPlanCreate {
                        user_id: 9,
                        plan_kind: kind,
                        label: label.to_string(),
                        plan_date: None,
                        plan: serde_json::json!({ "label": label }),
                    },
                )
                .unwrap();
            }
        }
        (dir, db)
    }

    #[test]
    fn test_list_and_count() {
        let (_dir, db) = seeded_db();
        let all = list_saved_plans(&db, 9, None, 10, 0).unwrap();
        assert_eq!(all.total, 2);
        assert_eq!(all.plans.len(), 2);

        let meals = list_saved_plans(&db, 9, Some(PlanKind::Meal), 10, 0).unwrap();
        assert_eq!(meals.total, 1);
        assert_eq!(meals.plans[0].label, "Sprouts Chaat");

        let other = list_saved_plans(&db, 10, None, 10, 0).unwrap();
        assert_eq!(other.total, 0);
    }

    #[test]
    fn test_get_and_delete() {
        let (_dir, db) = seeded_db();
        let id = list_saved_plans(&db, 9, None, 1, 0).unwrap().plans[0].id;

        let plan = get_saved_plan(&db, id).unwrap().unwrap();
        assert_eq!(plan.user_id, 9);

        assert!(delete_saved_plan(&db, id).unwrap().success);
        assert!(get_saved_plan(&db, id).unwrap().is_none());
        assert!(delete_saved_plan(&db, id).is_err());
    }
}
