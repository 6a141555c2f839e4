//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::RoadmapGraph;

/// Wrapper for the result of importing a generated plan.
pub struct ImportResult(pub RoadmapGraph);

impl fmt::Display for ImportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Imported plan with ID: {}", self.0.plan.id)?;
        writeln!(f)?;
        write!(f, "{}", self.0)
    }
}

/// Wrapper for the result of clearing the plan history.
pub struct ClearResult(pub usize);

impl fmt::Display for ClearResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => writeln!(f, "History was already empty."),
            1 => writeln!(f, "Deleted 1 plan."),
            n => writeln!(f, "Deleted {n} plans."),
        }
    }
}
