//! Markdown formatting for roadmaps and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrappers in this module add context such as the selected week or the
//! outcome of an operation. Everything renders as markdown, which the CLI
//! either styles through its terminal renderer or prints verbatim.
//!
//! - [`collections`]: plan history listing
//! - [`datetime`]: timestamp formatting
//! - [`models`]: tasks, weeks, plans, events
//! - [`progress`]: text progress bars
//! - [`results`]: import and clear-history results
//! - [`views`]: the loaded roadmap and toggle outcomes

pub mod collections;
pub mod datetime;
pub mod models;
pub mod progress;
pub mod results;
pub mod views;

pub use collections::PlanSummaries;
pub use datetime::{Age, LocalDateTime};
pub use models::WeekDetail;
pub use progress::ProgressBar;
pub use results::{ClearResult, ImportResult};
