//! Travel log normalization.
//!
//! A travel log is newline-separated rows of whitespace or tab separated
//! fields: `index date kind location [extra...]`. Rows that do not fit are
//! skipped rather than failing the whole log.

use chrono::NaiveDate;

use crate::error::DATE_FORMAT;
use crate::event::{Event, EventKind};

/// Minimum number of fields in a data row.
const MIN_FIELDS: usize = 4;

/// Parses one log row into an event.
///
/// Returns `None` when the row has fewer than four fields or its second field
/// is not a `YYYY-MM-DD` date. Fields after the fourth are ignored.
pub fn parse_log_line(line: &str) -> Option<Event> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let date = NaiveDate::parse_from_str(fields[1], DATE_FORMAT).ok()?;
    let kind = fields[2].parse::<EventKind>().unwrap_or_else(|never| match never {});
    Some(Event::new(date, kind, fields[3]))
}

/// Parses a full travel log into events sorted by date.
///
/// Never fails: blank, header and malformed rows are dropped. The sort is
/// stable so same-day crossings keep their log order.
pub fn parse_log(text: &str) -> Vec<Event> {
    let mut events = Vec::new();
    let mut header_found = false;
    let mut skipped = 0usize;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        if !header_found && is_header(line) {
            header_found = true;
            tracing::trace!(line = index + 1, "skipping header row");
            continue;
        }

        match parse_log_line(line) {
            Some(event) => events.push(event),
            None => {
                skipped += 1;
                tracing::trace!(line = index + 1, content = line, "skipping malformed log row");
            }
        }
    }

    events.sort_by_key(|event| event.date);
    tracing::debug!(accepted = events.len(), skipped, "parsed travel log");
    events
}

/// Recognises a column header such as `Row  DATE  TYPE  LOCATION`.
fn is_header(line: &str) -> bool {
    let tokens: Vec<String> = line
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect();

    let starts_with_row = tokens.first().is_some_and(|first| first == "row");
    let has_columns =
        tokens.iter().any(|t| t == "date") && tokens.iter().any(|t| t == "type");

    starts_with_row || has_columns
}
