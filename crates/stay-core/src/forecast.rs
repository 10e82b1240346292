//! Forecasting the effect of a planned trip.
//!
//! The trip is inserted into the real history as a synthetic arrival and
//! departure, then the usual pipeline runs with the trip's last day as the
//! reference date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calc::{CalculationConfig, measure};
use crate::error::StayError;
use crate::event::{Event, EventKind};
use crate::window::Window;

/// Default annual presence cap in days.
pub const DEFAULT_THRESHOLD_DAYS: u64 = 180;

const TRIP_START_LABEL: &str = "trip-start";
const TRIP_END_LABEL: &str = "trip-end";

/// A planned stay `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trip {
    start: NaiveDate,
    end: NaiveDate,
}

impl Trip {
    /// Creates a trip, rejecting ranges that do not end after they start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, StayError> {
        if start >= end {
            return Err(StayError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    fn events(&self) -> [Event; 2] {
        [
            Event::new(self.start, EventKind::Arrival, TRIP_START_LABEL),
            Event::new(self.end, EventKind::Departure, TRIP_END_LABEL),
        ]
    }
}

/// Predicted usage after a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Forecast {
    /// The 365 days ending on the trip's end date.
    pub window: Window,
    /// Days present in `window`, trip included.
    pub days_used: u64,
    /// Days left before `threshold_days`, never negative.
    pub days_remaining: u64,
    pub threshold_days: u64,
}

impl Forecast {
    pub const fn exceeds_threshold(&self) -> bool {
        self.days_used > self.threshold_days
    }
}

/// Forecasts presence at the end of `trip` given the real `events`.
///
/// `events` must be sorted by date. The synthetic trip events are merged in
/// date order; on the same day they follow the real events.
pub fn forecast_trip(
    events: &[Event],
    trip: Trip,
    threshold_days: u64,
    config: &CalculationConfig,
) -> Forecast {
    let mut merged = Vec::with_capacity(events.len() + 2);
    merged.extend_from_slice(events);
    merged.extend(trip.events());
    merged.sort_by_key(|event| event.date);

    let window = Window::trailing(trip.end);
    let days_used = measure(&merged, window, config, &mut ());
    let days_remaining = threshold_days.saturating_sub(days_used);

    tracing::debug!(
        trip_start = %trip.start,
        trip_end = %trip.end,
        days_used,
        days_remaining,
        "forecast trip"
    );

    Forecast {
        window,
        days_used,
        days_remaining,
        threshold_days,
    }
}
