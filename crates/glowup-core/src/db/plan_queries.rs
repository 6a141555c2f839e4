//! Plan creation, history listing and clearing.

use jiff::Timestamp;
use log::info;
use rusqlite::{params, OptionalExtension, Transaction};

use super::timestamp_at;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{join_products, parse_products, Plan, PlanSummary, RoadmapGraph, Task, Week},
    params::{NewPlan, NewWeek},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (current_week, total_weeks, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const INSERT_WEEK_SQL: &str = "INSERT INTO weeks (plan_id, number, title, summary, is_completed, is_unlocked, unlocked_at, completed_at) VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6, NULL)";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (week_id, title, body, category, timeframe, priority, is_completed, completed_at, products) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, NULL, ?7)";
// AUTOINCREMENT ids follow creation order exactly; textual timestamps do not
// sort reliably when the fractional part is omitted.
const SELECT_LATEST_PLAN_ID_SQL: &str = "SELECT id FROM plans ORDER BY id DESC LIMIT 1";
const SELECT_PLAN_SUMMARIES_SQL: &str = "SELECT id, current_week, created_at, updated_at, week_count, unlocked_weeks, total_tasks, completed_tasks FROM plan_summaries ORDER BY id DESC";
const DELETE_ALL_TASKS_SQL: &str = "DELETE FROM tasks";
const DELETE_ALL_WEEKS_SQL: &str = "DELETE FROM weeks";
const DELETE_ALL_PLANS_SQL: &str = "DELETE FROM plans";

/// Inserts one week and its tasks. Only the first week is passed an unlock time.
fn insert_week(
    tx: &Transaction<'_>,
    plan_id: u64,
    new_week: &NewWeek,
    unlocked_at: Option<Timestamp>,
) -> Result<(Week, Vec<Task>)> {
    let is_unlocked = unlocked_at.is_some();
    tx.execute(
        INSERT_WEEK_SQL,
        params![
            plan_id as i64,
            new_week.number,
            &new_week.title,
            &new_week.summary,
            is_unlocked,
            unlocked_at.map(|t| t.to_string()),
        ],
    )
    .db_context("Failed to insert week")?;
    let week_id = tx.last_insert_rowid() as u64;

    let mut tasks = Vec::with_capacity(new_week.tasks.len());
    for new_task in &new_week.tasks {
        let products = parse_products(&new_task.products);
        tx.execute(
            INSERT_TASK_SQL,
            params![
                week_id as i64,
                &new_task.title,
                &new_task.body,
                &new_task.category,
                &new_task.timeframe,
                new_task.priority,
                join_products(&products),
            ],
        )
        .db_context("Failed to insert task")?;

        tasks.push(Task {
            id: tx.last_insert_rowid() as u64,
            week_id,
            title: new_task.title.clone(),
            body: new_task.body.clone(),
            category: new_task.category.clone(),
            timeframe: new_task.timeframe.clone(),
            priority: new_task.priority,
            is_completed: false,
            completed_at: None,
            products,
        });
    }

    let week = Week {
        id: week_id,
        plan_id,
        number: new_week.number,
        title: new_week.title.clone(),
        summary: new_week.summary.clone(),
        is_completed: false,
        is_unlocked,
        unlocked_at,
        completed_at: None,
    };
    Ok((week, tasks))
}

impl super::Database {
    /// Stores a generated plan and returns it as a graph.
    ///
    /// The lowest-numbered week is unlocked at creation; every other week
    /// starts locked. Nothing is written if validation fails.
    pub fn create_plan(&mut self, new_plan: &NewPlan) -> Result<RoadmapGraph> {
        new_plan.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let weeks = new_plan.weeks_in_order();
        let current_week = weeks.last().map(|w| w.number).unwrap_or(0);

        tx.execute(
            INSERT_PLAN_SQL,
            params![current_week, current_week, &now_str, &now_str],
        )
        .db_context("Failed to insert plan")?;
        let plan_id = tx.last_insert_rowid() as u64;

        let mut stored_weeks = Vec::with_capacity(weeks.len());
        let mut stored_tasks = Vec::new();

        for (index, new_week) in weeks.iter().enumerate() {
            let unlocked_at = (index == 0).then_some(now);
            let (week, tasks) = insert_week(&tx, plan_id, new_week, unlocked_at)?;
            stored_weeks.push(week);
            stored_tasks.extend(tasks);
        }

        tx.commit().db_context("Failed to commit transaction")?;

        info!(
            "Created plan {plan_id} with {} weeks and {} tasks",
            stored_weeks.len(),
            stored_tasks.len()
        );

        let plan = Plan {
            id: plan_id,
            current_week,
            total_weeks: current_week,
            created_at: now,
            updated_at: now,
        };
        Ok(RoadmapGraph::new(plan, stored_weeks, stored_tasks))
    }

    /// Returns the id of the most recently created plan, if any.
    pub fn latest_plan_id(&self) -> Result<Option<u64>> {
        self.connection
            .query_row(SELECT_LATEST_PLAN_ID_SQL, [], |row| row.get::<_, i64>(0))
            .optional()
            .db_context("Failed to query latest plan")
            .map(|id| id.map(|id| id as u64))
    }

    /// Lists every stored plan with progress counts, newest first.
    pub fn list_plans(&self) -> Result<Vec<PlanSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(PlanSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    current_week: row.get(1)?,
                    created_at: timestamp_at(row, 2)?,
                    updated_at: timestamp_at(row, 3)?,
                    week_count: row.get(4)?,
                    unlocked_weeks: row.get(5)?,
                    total_tasks: row.get(6)?,
                    completed_tasks: row.get(7)?,
                })
            })
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;

        Ok(summaries)
    }

    /// Permanently deletes every plan with its weeks and tasks.
    ///
    /// Returns the number of plans removed.
    pub fn clear_history(&mut self) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        // Foreign keys cascade, but children go first in case they are off
        tx.execute(DELETE_ALL_TASKS_SQL, [])
            .db_context("Failed to delete tasks")?;
        tx.execute(DELETE_ALL_WEEKS_SQL, [])
            .db_context("Failed to delete weeks")?;
        let removed = tx
            .execute(DELETE_ALL_PLANS_SQL, [])
            .db_context("Failed to delete plans")?;

        tx.commit().db_context("Failed to commit transaction")?;

        info!("Cleared {removed} plans from history");
        Ok(removed)
    }
}
