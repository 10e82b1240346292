//! The trailing window and leading-edge adjustment.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::interval::PresenceInterval;

/// Length of the rolling window in days.
pub const WINDOW_DAYS: u64 = 365;

/// A half-open range of days `[start, end)` against which presence is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The 365 days ending at `as_of`.
    pub fn trailing(as_of: NaiveDate) -> Self {
        let start = as_of
            .checked_sub_days(Days::new(WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: as_of }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// How the leading edge of the interval set is corrected when the visible
/// history starts mid-stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// If the earliest event is a departure after the window start, assume
    /// presence from the window start until that departure.
    PrependPresence,
    /// Truncate a first interval straddling the window start to begin at it.
    #[default]
    ClipFirst,
}

impl BoundaryPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PrependPresence => "prepend-presence",
            Self::ClipFirst => "clip-first",
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies `policy` to the leading edge of `intervals`.
///
/// `events` are the date-sorted events the intervals were built from, with
/// nothing dated after the reference date. Applying the adjustment to its own
/// output changes nothing.
pub fn adjust_for_window_start(
    events: &[Event],
    mut intervals: Vec<PresenceInterval>,
    window_start: NaiveDate,
    policy: BoundaryPolicy,
) -> Vec<PresenceInterval> {
    match policy {
        BoundaryPolicy::PrependPresence => {
            let Some(first) = events.first() else {
                return intervals;
            };
            let already_present = intervals
                .first()
                .is_some_and(|interval| interval.start <= window_start);

            if first.is_departure() && first.date > window_start && !already_present {
                tracing::debug!(
                    %window_start,
                    departure = %first.date,
                    "assuming presence before first logged departure"
                );
                intervals.insert(0, PresenceInterval::new(window_start, first.date));
            }
        }
        BoundaryPolicy::ClipFirst => {
            if let Some(first) = intervals.first_mut() {
                if first.start < window_start && window_start < first.end {
                    first.start = window_start;
                }
            }
        }
    }
    intervals
}
