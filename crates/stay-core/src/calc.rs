//! Rolling-window day count: the full pipeline from events to a number.

use chrono::NaiveDate;

use crate::event::Event;
use crate::interval::build_presence_intervals;
use crate::overlap::{OverlapRecorder, PresenceObserver, WindowReport, total_overlap_days_observed};
use crate::window::{BoundaryPolicy, Window, adjust_for_window_start};

/// Configuration for window calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculationConfig {
    /// Leading-edge correction applied after intervals are built.
    pub boundary_policy: BoundaryPolicy,
}

impl CalculationConfig {
    pub const fn new(boundary_policy: BoundaryPolicy) -> Self {
        Self { boundary_policy }
    }
}

/// Days present in the 365 days before `as_of`.
///
/// Events must be sorted by date ascending, as returned by
/// [`parse_log`](crate::parse_log). The result is always within `0..=365`.
pub fn compute_days_in_window(
    events: &[Event],
    as_of: NaiveDate,
    config: &CalculationConfig,
) -> u64 {
    compute_days_in_window_observed(events, as_of, config, &mut ())
}

/// Like [`compute_days_in_window`], reporting intermediate results to `observer`.
pub fn compute_days_in_window_observed<O: PresenceObserver + ?Sized>(
    events: &[Event],
    as_of: NaiveDate,
    config: &CalculationConfig,
    observer: &mut O,
) -> u64 {
    measure(events, Window::trailing(as_of), config, observer)
}

/// Computes the window count along with the per-interval breakdown.
pub fn analyze_window(
    events: &[Event],
    as_of: NaiveDate,
    config: &CalculationConfig,
) -> WindowReport {
    let window = Window::trailing(as_of);
    let mut recorder = OverlapRecorder::new(window);
    measure(events, window, config, &mut recorder);
    recorder.into_report()
}

/// Runs build → adjust → aggregate with `window.end` as the reference date.
///
/// Events dated after the reference date are invisible to every stage.
pub(crate) fn measure<O: PresenceObserver + ?Sized>(
    events: &[Event],
    window: Window,
    config: &CalculationConfig,
    observer: &mut O,
) -> u64 {
    let visible = &events[..events.partition_point(|event| event.date <= window.end)];
    let intervals = build_presence_intervals(visible, window.end);
    let intervals =
        adjust_for_window_start(visible, intervals, window.start, config.boundary_policy);

    for interval in &intervals {
        observer.on_interval(interval);
    }

    total_overlap_days_observed(&intervals, &window, observer)
}
