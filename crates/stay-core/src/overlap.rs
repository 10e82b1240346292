//! Overlap between presence intervals and a window.
//!
//! Counting is half-open on both sides, so abutting intervals never count a
//! shared boundary day twice. Per-interval diagnostics go through a
//! [`PresenceObserver`] rather than the return value.

use serde::Serialize;

use crate::interval::PresenceInterval;
use crate::window::Window;

/// Receives diagnostics while a window is being measured.
///
/// Every method defaults to doing nothing.
pub trait PresenceObserver {
    /// Called once per interval after window adjustment, before counting.
    fn on_interval(&mut self, _interval: &PresenceInterval) {}

    /// Called once per interval with the clipped overlap, if any, and its length.
    fn on_overlap(
        &mut self,
        _interval: &PresenceInterval,
        _overlap: Option<PresenceInterval>,
        _days: u64,
    ) {
    }

    /// Called with the final count.
    fn on_total(&mut self, _total_days: u64) {}
}

impl PresenceObserver for () {}

/// Forwards every notification to both observers, first then second.
impl<A: PresenceObserver, B: PresenceObserver> PresenceObserver for (A, B) {
    fn on_interval(&mut self, interval: &PresenceInterval) {
        self.0.on_interval(interval);
        self.1.on_interval(interval);
    }

    fn on_overlap(
        &mut self,
        interval: &PresenceInterval,
        overlap: Option<PresenceInterval>,
        days: u64,
    ) {
        self.0.on_overlap(interval, overlap, days);
        self.1.on_overlap(interval, overlap, days);
    }

    fn on_total(&mut self, total_days: u64) {
        self.0.on_total(total_days);
        self.1.on_total(total_days);
    }
}

/// Emits every notification as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PresenceObserver for TracingObserver {
    fn on_interval(&mut self, interval: &PresenceInterval) {
        tracing::debug!(start = %interval.start, end = %interval.end, "presence interval");
    }

    fn on_overlap(
        &mut self,
        interval: &PresenceInterval,
        overlap: Option<PresenceInterval>,
        days: u64,
    ) {
        match overlap {
            Some(overlap) => {
                tracing::debug!(start = %overlap.start, end = %overlap.end, days, "overlap");
            }
            None => {
                tracing::debug!(start = %interval.start, end = %interval.end, "no overlap");
            }
        }
    }

    fn on_total(&mut self, total_days: u64) {
        tracing::debug!(total_days, "days present in window");
    }
}

/// One interval and the days it contributes to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalOverlap {
    pub interval: PresenceInterval,
    pub days: u64,
}

/// Breakdown of a window measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowReport {
    pub window: Window,
    pub intervals: Vec<IntervalOverlap>,
    pub total_days: u64,
}

/// Collects overlap notifications into a [`WindowReport`].
#[derive(Debug, Clone)]
pub struct OverlapRecorder {
    window: Window,
    intervals: Vec<IntervalOverlap>,
    total_days: u64,
}

impl OverlapRecorder {
    pub const fn new(window: Window) -> Self {
        Self {
            window,
            intervals: Vec::new(),
            total_days: 0,
        }
    }

    pub fn into_report(self) -> WindowReport {
        WindowReport {
            window: self.window,
            intervals: self.intervals,
            total_days: self.total_days,
        }
    }
}

impl PresenceObserver for OverlapRecorder {
    fn on_overlap(
        &mut self,
        interval: &PresenceInterval,
        _overlap: Option<PresenceInterval>,
        days: u64,
    ) {
        self.intervals.push(IntervalOverlap {
            interval: *interval,
            days,
        });
    }

    fn on_total(&mut self, total_days: u64) {
        self.total_days = total_days;
    }
}

/// Clips `interval` to `window`, returning `None` when they do not overlap.
fn clip(interval: &PresenceInterval, window: &Window) -> Option<PresenceInterval> {
    let clipped = PresenceInterval::new(
        interval.start.max(window.start),
        interval.end.min(window.end),
    );
    (!clipped.is_empty()).then_some(clipped)
}

/// Total whole days that `intervals` overlap `window`.
///
/// Intervals are expected to be non-overlapping; overlapping inputs are not
/// merged and would be counted twice.
pub fn total_overlap_days(intervals: &[PresenceInterval], window: &Window) -> u64 {
    total_overlap_days_observed(intervals, window, &mut ())
}

/// Like [`total_overlap_days`], reporting each interval to `observer`.
pub fn total_overlap_days_observed<O: PresenceObserver + ?Sized>(
    intervals: &[PresenceInterval],
    window: &Window,
    observer: &mut O,
) -> u64 {
    let mut total_days = 0u64;

    for interval in intervals {
        let overlap = clip(interval, window);
        let days = overlap.map_or(0, |overlap| overlap.days());
        observer.on_overlap(interval, overlap, days);
        total_days = total_days.saturating_add(days);
    }

    observer.on_total(total_days);
    total_days
}
