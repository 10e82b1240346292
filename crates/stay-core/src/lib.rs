//! Core domain logic for counting days of presence.
//!
//! This crate turns a border-crossing log into presence intervals and
//! measures them against a trailing 365-day window:
//! - Log normalization: raw text rows into date-ordered events
//! - Interval building: a two-state machine over arrivals and departures
//! - Window adjustment and overlap counting
//! - Forecasting: inserting a planned trip into the real history
//!
//! Every computation takes its reference date as an argument; nothing here
//! reads the clock or performs I/O.

mod calc;
mod error;
pub mod event;
pub mod forecast;
pub mod interval;
pub mod log;
pub mod overlap;
pub mod window;

pub use calc::{
    CalculationConfig, analyze_window, compute_days_in_window, compute_days_in_window_observed,
};
pub use error::{StayError, parse_date};
pub use event::{Event, EventKind};
pub use forecast::{DEFAULT_THRESHOLD_DAYS, Forecast, Trip, forecast_trip};
pub use interval::{PresenceInterval, build_presence_intervals};
pub use log::{parse_log, parse_log_line};
pub use overlap::{
    IntervalOverlap, OverlapRecorder, PresenceObserver, TracingObserver, WindowReport,
    total_overlap_days, total_overlap_days_observed,
};
pub use window::{BoundaryPolicy, WINDOW_DAYS, Window, adjust_for_window_start};
