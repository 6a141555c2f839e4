//! Data models for plans, weeks and tasks.
//!
//! A [`RoadmapGraph`] owns one [`Plan`] plus flat id-keyed tables of
//! [`Week`]s and [`Task`]s. Children refer to their parent by id. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use glowup_core::models::{Plan, RoadmapGraph, Task, Week};
//! use jiff::Timestamp;
//!
//! let now = Timestamp::now();
//! let plan = Plan {
//!     id: 1,
//!     current_week: 1,
//!     total_weeks: 1,
//!     created_at: now,
//!     updated_at: now,
//! };
//! let week = Week {
//!     id: 10,
//!     plan_id: 1,
//!     number: 1,
//!     title: "Foundations".to_string(),
//!     summary: "Build the basics".to_string(),
//!     is_completed: false,
//!     is_unlocked: true,
//!     unlocked_at: Some(now),
//!     completed_at: None,
//! };
//! let task = Task {
//!     id: 100,
//!     week_id: 10,
//!     title: "Drink water".to_string(),
//!     body: "Two litres a day".to_string(),
//!     category: "Hydration".to_string(),
//!     timeframe: "Daily".to_string(),
//!     priority: 1,
//!     is_completed: false,
//!     completed_at: None,
//!     products: vec![],
//! };
//!
//! let graph = RoadmapGraph::new(plan, vec![week], vec![task]);
//! assert_eq!(graph.task_counts(10), (0, 1));
//! assert_eq!(graph.current_week().map(|w| w.id), Some(10));
//! ```

pub mod events;
pub mod graph;
pub mod plan;
pub mod summary;
pub mod task;
pub mod week;

#[cfg(test)]
mod tests;

pub use events::RoadmapEvent;
pub use graph::RoadmapGraph;
pub use plan::Plan;
pub use summary::PlanSummary;
pub use task::{join_products, parse_products, Task};
pub use week::Week;
