//! Parameter structures for roadmap operations.
//!
//! These types carry input across interfaces (CLI, tests, future front ends)
//! without framework-specific derives. [`NewPlan`] doubles as the document
//! format produced by the external plan generator.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadmapError};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for showing the current roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowRoadmap {
    /// Week number the user had selected before, if any
    pub week: Option<u32>,
}

/// A freshly generated plan, ready to be stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlan {
    pub weeks: Vec<NewWeek>,
}

/// One week of a generated plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewWeek {
    /// 1-based week number
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tasks: Vec<NewTask>,
}

/// One task of a generated week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default)]
    pub priority: i64,
    /// Newline-delimited product suggestions
    #[serde(default)]
    pub products: String,
}

/// Highest week number accepted on import, ten years of weekly plans.
pub const MAX_WEEK_NUMBER: u32 = 520;

impl NewPlan {
    /// Parses a generated plan document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks week numbering and task titles.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for week in &self.weeks {
            if week.number == 0 {
                return Err(RoadmapError::invalid_input("weeks.number")
                    .with_reason("Week numbers start at 1"));
            }
            if week.number > MAX_WEEK_NUMBER {
                return Err(RoadmapError::invalid_input("weeks.number").with_reason(format!(
                    "Week number {} exceeds the maximum of {MAX_WEEK_NUMBER}",
                    week.number
                )));
            }
            if !seen.insert(week.number) {
                return Err(RoadmapError::invalid_input("weeks.number")
                    .with_reason(format!("Duplicate week number {}", week.number)));
            }
            if let Some(task) = week.tasks.iter().find(|t| t.title.trim().is_empty()) {
                return Err(RoadmapError::invalid_input("tasks.title").with_reason(format!(
                    "Task with priority {} in week {} has an empty title",
                    task.priority, week.number
                )));
            }
        }
        Ok(())
    }

    /// Weeks sorted by ascending number.
    pub fn weeks_in_order(&self) -> Vec<&NewWeek> {
        let mut weeks: Vec<&NewWeek> = self.weeks.iter().collect();
        weeks.sort_by_key(|w| w.number);
        weeks
    }
}
