//! Text progress bars.

use std::fmt;

const WIDTH: usize = 10;

/// Renders a ratio in `[0, 1]` as `███░░░░░░░ 30%`.
pub struct ProgressBar(pub f64);

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ratio = if self.0.is_finite() {
            self.0.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (ratio * WIDTH as f64).round() as usize;
        write!(
            f,
            "{}{} {:.0}%",
            "█".repeat(filled),
            "░".repeat(WIDTH - filled),
            ratio * 100.0
        )
    }
}
