//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp in the system timezone as `YYYY-MM-DD HH:MM TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

/// Coarse age of a timestamp relative to `now`, e.g. `3d ago`.
pub struct Age {
    pub since: Timestamp,
    pub now: Timestamp,
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.now.duration_since(self.since).as_secs().max(0);
        match secs {
            0..=59 => write!(f, "just now"),
            60..=3_599 => write!(f, "{}m ago", secs / 60),
            3_600..=86_399 => write!(f, "{}h ago", secs / 3_600),
            _ => write!(f, "{}d ago", secs / 86_400),
        }
    }
}
