//! Task model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// An atomic action item within a week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the owning week
    pub week_id: u64,

    /// Short title of the task
    pub title: String,

    /// Longer explanation of what to do
    pub body: String,

    /// Free-form category label (e.g. "Skincare")
    pub category: String,

    /// Free-form timeframe label (e.g. "Daily", "Morning")
    pub timeframe: String,

    /// Display order within the week, ascending
    pub priority: i64,

    /// Whether the task has been completed
    pub is_completed: bool,

    /// When the task was completed; present iff `is_completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Suggested products, one per entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<String>,
}

impl Task {
    /// Sets the completion flag, keeping `completed_at` consistent with it.
    pub fn set_completed(&mut self, completed: bool, now: Timestamp) {
        self.is_completed = completed;
        self.completed_at = completed.then_some(now);
    }
}

/// Splits newline-delimited product text into trimmed, non-empty entries.
pub fn parse_products(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Joins products back into their newline-delimited storage form.
pub fn join_products(products: &[String]) -> Option<String> {
    if products.is_empty() {
        None
    } else {
        Some(products.join("\n"))
    }
}
