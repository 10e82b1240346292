//! Forecast command for planning a trip against the day cap.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use stay_core::{Forecast, Trip, forecast_trip, parse_log};

use crate::Config;

/// JSON forecast structure.
#[derive(Debug, Serialize)]
struct JsonForecast {
    trip: Trip,
    #[serde(flatten)]
    forecast: Forecast,
    exceeds_threshold: bool,
}

pub fn run<W: Write>(
    writer: &mut W,
    log_text: &str,
    trip: Trip,
    threshold_days: Option<u64>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let events = parse_log(log_text);
    let threshold_days = threshold_days.unwrap_or(config.threshold_days);
    let forecast = forecast_trip(&events, trip, threshold_days, &config.calculation());

    if json {
        let report = JsonForecast {
            trip,
            forecast,
            exceeds_threshold: forecast.exceeds_threshold(),
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if events.is_empty() {
        writeln!(writer, "No valid entries found in travel log.")?;
    }
    writeln!(writer, "Trip: {} to {}", trip.start(), trip.end())?;
    writeln!(
        writer,
        "Days present in the 365 days before {}: {}",
        trip.end(),
        forecast.days_used
    )?;
    writeln!(
        writer,
        "Days remaining before reaching {}: {}",
        forecast.threshold_days, forecast.days_remaining
    )?;
    if forecast.exceeds_threshold() {
        writeln!(
            writer,
            "Warning: this trip exceeds the {}-day limit by {} days.",
            forecast.threshold_days,
            forecast.days_used - forecast.threshold_days
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use insta::assert_snapshot;

    const LOG: &str = "Row DATE TYPE LOCATION
1 2024-01-01 Arrival NYC
2 2024-06-19 Departure NYC";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn render(trip: Trip, threshold: Option<u64>, json: bool) -> String {
        let mut output = Vec::new();
        run(&mut output, LOG, trip, threshold, json, &Config::default()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn forecast_over_threshold_warns() {
        let trip = Trip::new(date(2024, 8, 1), date(2024, 8, 21)).unwrap();
        let output = render(trip, None, false);
        assert_snapshot!(output, @r"
        Trip: 2024-08-01 to 2024-08-21
        Days present in the 365 days before 2024-08-21: 190
        Days remaining before reaching 180: 0
        Warning: this trip exceeds the 180-day limit by 10 days.
        ");
    }

    #[test]
    fn forecast_threshold_override() {
        let trip = Trip::new(date(2024, 8, 1), date(2024, 8, 21)).unwrap();
        let output = render(trip, Some(200), false);
        assert_snapshot!(output, @r"
        Trip: 2024-08-01 to 2024-08-21
        Days present in the 365 days before 2024-08-21: 190
        Days remaining before reaching 200: 10
        ");
    }

    #[test]
    fn forecast_outputs_json() {
        let trip = Trip::new(date(2024, 8, 1), date(2024, 8, 21)).unwrap();
        let output = render(trip, None, true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["trip"]["start"], "2024-08-01");
        assert_eq!(value["trip"]["end"], "2024-08-21");
        assert_eq!(value["window"]["start"], "2023-08-22");
        assert_eq!(value["days_used"], 190);
        assert_eq!(value["days_remaining"], 0);
        assert_eq!(value["threshold_days"], 180);
        assert_eq!(value["exceeds_threshold"], true);
    }
}
