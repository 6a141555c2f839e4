//! Loading and saving a whole roadmap graph.

use log::{debug, warn};
use rusqlite::{params, OptionalExtension};

use super::{optional_timestamp_at, timestamp_at};
use crate::{
    error::{DatabaseResultExt, Result, RoadmapError},
    models::{parse_products, Plan, RoadmapGraph, Task, Week},
};

const SELECT_PLAN_SQL: &str =
    "SELECT id, current_week, total_weeks, created_at, updated_at FROM plans WHERE id = ?1";
const SELECT_WEEKS_BY_PLAN_SQL: &str = "SELECT id, plan_id, number, title, summary, is_completed, is_unlocked, unlocked_at, completed_at FROM weeks WHERE plan_id = ?1 ORDER BY number";
const SELECT_TASKS_BY_PLAN_SQL: &str = "SELECT t.id, t.week_id, t.title, t.body, t.category, t.timeframe, t.priority, t.is_completed, t.completed_at, t.products FROM tasks t JOIN weeks w ON t.week_id = w.id WHERE w.plan_id = ?1 ORDER BY t.priority, t.id";
const UPDATE_PLAN_SQL: &str =
    "UPDATE plans SET current_week = ?1, total_weeks = ?2, updated_at = ?3 WHERE id = ?4";
const UPDATE_WEEK_SQL: &str = "UPDATE weeks SET is_completed = ?1, is_unlocked = ?2, unlocked_at = ?3, completed_at = ?4 WHERE id = ?5 AND plan_id = ?6";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET is_completed = ?1, completed_at = ?2 WHERE id = ?3 AND week_id = ?4";

impl super::Database {
    fn build_week_from_row(row: &rusqlite::Row) -> rusqlite::Result<Week> {
        Ok(Week {
            id: row.get::<_, i64>(0)? as u64,
            plan_id: row.get::<_, i64>(1)? as u64,
            number: row.get(2)?,
            title: row.get(3)?,
            summary: row.get(4)?,
            is_completed: row.get(5)?,
            is_unlocked: row.get(6)?,
            unlocked_at: optional_timestamp_at(row, 7)?,
            completed_at: optional_timestamp_at(row, 8)?,
        })
    }

    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        let products: Option<String> = row.get(9)?;

        Ok(Task {
            id: row.get::<_, i64>(0)? as u64,
            week_id: row.get::<_, i64>(1)? as u64,
            title: row.get(2)?,
            body: row.get(3)?,
            category: row.get(4)?,
            timeframe: row.get(5)?,
            priority: row.get(6)?,
            is_completed: row.get(7)?,
            completed_at: optional_timestamp_at(row, 8)?,
            products: products.as_deref().map(parse_products).unwrap_or_default(),
        })
    }

    /// Loads a plan with all of its weeks and tasks.
    pub fn load_roadmap(&self, plan_id: u64) -> Result<Option<RoadmapGraph>> {
        let plan = self
            .connection
            .query_row(SELECT_PLAN_SQL, params![plan_id as i64], |row| {
                Ok(Plan {
                    id: row.get::<_, i64>(0)? as u64,
                    current_week: row.get(1)?,
                    total_weeks: row.get(2)?,
                    created_at: timestamp_at(row, 3)?,
                    updated_at: timestamp_at(row, 4)?,
                })
            })
            .optional()
            .db_context("Failed to query plan")?;

        let Some(plan) = plan else {
            return Ok(None);
        };

        let mut stmt = self
            .connection
            .prepare(SELECT_WEEKS_BY_PLAN_SQL)
            .db_context("Failed to prepare query")?;
        let weeks = stmt
            .query_map(params![plan_id as i64], Self::build_week_from_row)
            .db_context("Failed to query weeks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch weeks")?;

        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_BY_PLAN_SQL)
            .db_context("Failed to prepare query")?;
        let tasks = stmt
            .query_map(params![plan_id as i64], Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        debug!(
            "Loaded plan {plan_id}: {} weeks, {} tasks",
            weeks.len(),
            tasks.len()
        );

        Ok(Some(RoadmapGraph::new(plan, weeks, tasks)))
    }

    /// Loads the most recently created plan, the only one that is authoritative.
    pub fn load_latest(&self) -> Result<Option<RoadmapGraph>> {
        match self.latest_plan_id()? {
            Some(id) => self.load_roadmap(id),
            None => Ok(None),
        }
    }

    /// Writes the mutable state of a graph back in a single transaction.
    ///
    /// Only completion, unlock and plan metadata columns are written. If any
    /// row no longer exists under its parent, the transaction is rolled back
    /// and a not-found error is returned.
    pub fn save_roadmap(&mut self, graph: &RoadmapGraph) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = &graph.plan;
        let rows = tx
            .execute(
                UPDATE_PLAN_SQL,
                params![
                    plan.current_week,
                    plan.total_weeks,
                    plan.updated_at.to_string(),
                    plan.id as i64
                ],
            )
            .db_context("Failed to update plan")?;
        if rows == 0 {
            warn!("Plan {} vanished before save", plan.id);
            return Err(RoadmapError::PlanNotFound { id: plan.id });
        }

        for week in graph.weeks.values() {
            let rows = tx
                .execute(
                    UPDATE_WEEK_SQL,
                    params![
                        week.is_completed,
                        week.is_unlocked,
                        week.unlocked_at.map(|t| t.to_string()),
                        week.completed_at.map(|t| t.to_string()),
                        week.id as i64,
                        week.plan_id as i64
                    ],
                )
                .db_context("Failed to update week")?;
            if rows == 0 {
                warn!("Week {} vanished before save", week.id);
                return Err(RoadmapError::WeekNotFound { id: week.id });
            }
        }

        for task in graph.tasks.values() {
            let rows = tx
                .execute(
                    UPDATE_TASK_SQL,
                    params![
                        task.is_completed,
                        task.completed_at.map(|t| t.to_string()),
                        task.id as i64,
                        task.week_id as i64
                    ],
                )
                .db_context("Failed to update task")?;
            if rows == 0 {
                warn!("Task {} vanished before save", task.id);
                return Err(RoadmapError::TaskNotFound { id: task.id });
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
