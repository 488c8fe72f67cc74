//! Saved plan model
//!
//! Generated plans persisted per user after the engine returns. The plan body
//! is stored as JSON exactly as it was returned to the caller.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

/// Which generator produced a saved plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Meal,
    Workout,
    DayMealPlan,
    FocusWorkout,
}

impl PlanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::Meal => "meal",
            PlanKind::Workout => "workout",
            PlanKind::DayMealPlan => "day_meal_plan",
            PlanKind::FocusWorkout => "focus_workout",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "meal" => Some(PlanKind::Meal),
            "workout" => Some(PlanKind::Workout),
            "day_meal_plan" => Some(PlanKind::DayMealPlan),
            "focus_workout" => Some(PlanKind::FocusWorkout),
            _ => None,
        }
    }
}

/// A persisted plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: i64,
    pub user_id: i64,
    pub plan_kind: PlanKind,
    pub label: String,
    pub plan_date: String,
    pub plan: serde_json::Value,
    pub created_at: String,
}

/// Data for saving a plan
#[derive(Debug, Clone)]
pub struct SavedPlanCreate {
    pub user_id: i64,
    pub plan_kind: PlanKind,
    pub label: String,
    /// Defaults to today (UTC) when not provided
    pub plan_date: Option<String>,
    pub plan: serde_json::Value,
}

impl SavedPlan {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let kind_str: String = row.get("plan_kind")?;
        let plan_kind = PlanKind::from_str(&kind_str).unwrap_or(PlanKind::Meal);

        let plan_json: String = row.get("plan_json")?;
        let plan = serde_json::from_str(&plan_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            plan_kind,
            label: row.get("label")?,
            plan_date: row.get("plan_date")?,
            plan,
            created_at: row.get("created_at")?,
        })
    }

    /// Save a new plan
    pub fn create(conn: &Connection, data: &SavedPlanCreate) -> DbResult<Self> {
        let plan_date = data
            .plan_date
            .clone()
            .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());
        let plan_json = serde_json::to_string(&data.plan)?;

        conn.execute(
            r#"
            INSERT INTO saved_plans (user_id, plan_kind, label, plan_date, plan_json)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                data.user_id,
                data.plan_kind.as_str(),
                data.label,
                plan_date,
                plan_json,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?
            .ok_or_else(|| DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    /// Get a saved plan by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM saved_plans WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(plan) => Ok(Some(plan)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List a user's saved plans, newest first, optionally for one kind
    pub fn list_for_user(
        conn: &Connection,
        user_id: i64,
        kind: Option<PlanKind>,
        limit: i64,
        offset: i64,
    ) -> DbResult<Vec<Self>> {
        let plans = match kind {
            Some(kind) => {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT * FROM saved_plans
                    WHERE user_id = ?1 AND plan_kind = ?2
                    ORDER BY created_at DESC, id DESC
                    LIMIT ?3 OFFSET ?4
                    "#,
                )?;
                let rows = stmt
                    .query_map(params![user_id, kind.as_str(), limit, offset], Self::from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT * FROM saved_plans
                    WHERE user_id = ?1
                    ORDER BY created_at DESC, id DESC
                    LIMIT ?2 OFFSET ?3
                    "#,
                )?;
                let rows = stmt
                    .query_map(params![user_id, limit, offset], Self::from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
        };

        Ok(plans)
    }

    /// Count a user's saved plans
    pub fn count_for_user(conn: &Connection, user_id: i64, kind: Option<PlanKind>) -> DbResult<i64> {
        let count = match kind {
            Some(kind) => conn.query_row(
                "SELECT COUNT(*) FROM saved_plans WHERE user_id = ?1 AND plan_kind = ?2",
                params![user_id, kind.as_str()],
                |row| row.get(0),
            )?,
            None => conn.query_row(
                "SELECT COUNT(*) FROM saved_plans WHERE user_id = ?1",
                [user_id],
                |row| row.get(0),
            )?,
        };
        Ok(count)
    }

    /// Delete a saved plan
    pub fn delete(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM saved_plans WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn sample(user_id: i64, kind: PlanKind, label: &str) -> SavedPlanCreate {
        SavedPlanCreate {
            user_id,
            plan_kind: kind,
            label: label.to_string(),
            plan_date: Some("2026-10-16".to_string()),
            plan: serde_json::json!({ "name": label, "totalMacros": { "calories": 500.0 } }),
        }
    }

    #[test]
    fn test_create_and_get() {
        let conn = test_conn();
        let saved = SavedPlan::create(&conn, &sample(7, PlanKind::Meal, "Rajma Rice Bowl")).unwrap();

        let loaded = SavedPlan::get_by_id(&conn, saved.id).unwrap().unwrap();
        assert_eq!(loaded.user_id, 7);
        assert_eq!(loaded.plan_kind, PlanKind::Meal);
        assert_eq!(loaded.plan_date, "2026-10-16");
        assert_eq!(loaded.plan["totalMacros"]["calories"], 500.0);
    }

    #[test]
    fn test_list_filters_by_user_and_kind() {
        let conn = test_conn();
        SavedPlan::create(&conn, &sample(1, PlanKind::Meal, "a")).unwrap();
        SavedPlan::create(&conn, &sample(1, PlanKind::Workout, "b")).unwrap();
        SavedPlan::create(&conn, &sample(2, PlanKind::Meal, "c")).unwrap();

        let all = SavedPlan::list_for_user(&conn, 1, None, 50, 0).unwrap();
        assert_eq!(all.len(), 2);
        // newest first
        assert_eq!(all[0].label, "b");

        let meals = SavedPlan::list_for_user(&conn, 1, Some(PlanKind::Meal), 50, 0).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].label, "a");

        assert_eq!(SavedPlan::count_for_user(&conn, 1, None).unwrap(), 2);
        assert_eq!(SavedPlan::count_for_user(&conn, 2, Some(PlanKind::Workout)).unwrap(), 0);
    }

    #[test]
    fn test_delete() {
        let conn = test_conn();
        let saved = SavedPlan::create(&conn, &sample(1, PlanKind::FocusWorkout, "x")).unwrap();
        assert!(SavedPlan::delete(&conn, saved.id).unwrap());
        assert!(!SavedPlan::delete(&conn, saved.id).unwrap());
        assert!(SavedPlan::get_by_id(&conn, saved.id).unwrap().is_none());
    }
}
