//! Shared utilities for CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

/// Reads the travel log from `path`, or from `reader` when no path is given.
pub fn read_log<R: Read>(path: Option<&Path>, mut reader: R) -> Result<String> {
    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "reading travel log");
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read travel log {}", path.display()));
    }

    tracing::debug!("reading travel log from stdin");
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("failed to read travel log from stdin")?;
    Ok(text)
}

/// Parses a `--name` date argument.
pub fn parse_date_arg(value: &str, name: &str) -> Result<NaiveDate> {
    stay_core::parse_date(value).with_context(|| format!("invalid --{name}"))
}

/// Resolves the `--as-of` argument, defaulting to the local calendar date.
pub fn resolve_as_of(value: Option<&str>) -> Result<NaiveDate> {
    value.map_or_else(
        || Ok(Local::now().date_naive()),
        |value| parse_date_arg(value, "as-of"),
    )
}
