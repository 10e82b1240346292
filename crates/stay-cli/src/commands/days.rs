//! Days command for counting presence in the trailing window.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use stay_core::{
    OverlapRecorder, TracingObserver, Window, WindowReport, compute_days_in_window_observed,
    parse_log,
};

use crate::Config;

/// Options for `stay days`.
#[derive(Debug, Clone, Copy)]
pub struct DaysOptions {
    pub as_of: NaiveDate,
    pub show_intervals: bool,
    pub json: bool,
}

pub fn run<W: Write>(
    writer: &mut W,
    log_text: &str,
    options: DaysOptions,
    config: &Config,
) -> Result<()> {
    let events = parse_log(log_text);
    let window = Window::trailing(options.as_of);

    let mut observers = (TracingObserver, OverlapRecorder::new(window));
    let total = compute_days_in_window_observed(
        &events,
        options.as_of,
        &config.calculation(),
        &mut observers,
    );
    let report = observers.1.into_report();
    debug_assert_eq!(report.window, window);
    debug_assert_eq!(report.total_days, total);

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if events.is_empty() {
        writeln!(writer, "No valid entries found in travel log.")?;
    }
    writeln!(writer, "Window: {}", report.window)?;
    if options.show_intervals {
        write_intervals(writer, &report)?;
    }
    writeln!(
        writer,
        "Days present in the 365 days before {}: {}",
        options.as_of, report.total_days
    )?;

    Ok(())
}

fn write_intervals<W: Write>(writer: &mut W, report: &WindowReport) -> Result<()> {
    writeln!(writer, "Intervals:")?;
    if report.intervals.is_empty() {
        writeln!(writer, "  (none)")?;
    }
    for entry in &report.intervals {
        writeln!(
            writer,
            "  {} to {}  {:>3} days",
            entry.interval.start, entry.interval.end, entry.days
        )?;
    }
    Ok(())
}
