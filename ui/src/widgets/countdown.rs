//! Launch countdown.

use time::{Duration, OffsetDateTime};

/// Remaining time split for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    fn from_duration(remaining: Duration) -> Self {
        let total = remaining.whole_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    /// Two-digit display for a unit, e.g. `07`.
    pub fn padded(value: i64) -> String {
        format!("{value:02}")
    }
}

/// Deadline fixed once, at a constant offset from the session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    deadline: OffsetDateTime,
}

impl Countdown {
    /// Offsets past the representable calendar clamp to its edge.
    pub fn starting_at(session_start: OffsetDateTime, offset: Duration) -> Self {
        Self {
            deadline: session_start.saturating_add(offset),
        }
    }

    pub fn deadline(&self) -> OffsetDateTime {
        self.deadline
    }

    pub fn remaining(&self, now: OffsetDateTime) -> CountdownParts {
        CountdownParts::from_duration(self.deadline - now)
    }

    pub fn is_finished(&self, now: OffsetDateTime) -> bool {
        now >= self.deadline
    }
}
