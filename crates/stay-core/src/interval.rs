//! Presence interval construction.
//!
//! # Algorithm Summary
//!
//! 1. Drop events dated after the reference date
//! 2. Feed each remaining event to a two-state machine (outside / inside)
//! 3. Feed a terminal close signal at the reference date, which ends any open stay
//!
//! Duplicate arrivals and unmatched departures do not fit the current state
//! and are ignored.

use std::iter;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// A half-open range `[start, end)` of days spent in-country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresenceInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PresenceInterval {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whole days covered, zero for empty or inverted ranges.
    pub fn days(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days().unsigned_abs()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Input to the presence state machine.
#[derive(Debug, Clone, Copy)]
enum Signal<'a> {
    /// A logged (or synthetic) crossing.
    Crossing(&'a Event),
    /// Nothing happened between the last crossing and this date.
    Close(NaiveDate),
}

/// Current presence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Outside,
    Inside { since: NaiveDate },
}

impl Presence {
    /// Applies one signal, returning the next state and any completed stay.
    fn step(self, signal: Signal<'_>) -> (Self, Option<PresenceInterval>) {
        match (self, signal) {
            (Self::Outside, Signal::Crossing(event)) if event.is_arrival() => {
                (Self::Inside { since: event.date }, None)
            }
            (Self::Inside { since }, Signal::Crossing(event)) if event.is_departure() => {
                (Self::Outside, Some(PresenceInterval::new(since, event.date)))
            }
            (Self::Inside { since }, Signal::Close(at)) => {
                (Self::Outside, Some(PresenceInterval::new(since, at)))
            }
            (state, _) => (state, None),
        }
    }
}

/// Builds the presence intervals implied by `events` as of `reference_date`.
///
/// Events must be sorted by date ascending. An open stay is closed at the
/// reference date. Zero-length stays are dropped, so every returned interval
/// has `start < end`; intervals come out ordered and non-overlapping.
pub fn build_presence_intervals(
    events: &[Event],
    reference_date: NaiveDate,
) -> Vec<PresenceInterval> {
    let signals = events
        .iter()
        .filter(|event| event.date <= reference_date)
        .map(Signal::Crossing)
        .chain(iter::once(Signal::Close(reference_date)));

    let mut state = Presence::Outside;
    let mut intervals = Vec::new();

    for signal in signals {
        let (next, completed) = state.step(signal);
        state = next;
        if let Some(interval) = completed.filter(|interval| !interval.is_empty()) {
            intervals.push(interval);
        }
    }

    debug_assert_eq!(state, Presence::Outside);
    intervals
}
