//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rolling-window presence day counter.
///
/// Reads a travel log of arrivals and departures and reports how many days
/// fall inside the trailing 365-day window.
#[derive(Debug, Parser)]
#[command(name = "stay", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count days present in the 365 days before a date.
    Days {
        /// Travel log file. Falls back to the configured log, then stdin.
        #[arg(short, long)]
        log: Option<PathBuf>,

        /// Reference date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        as_of: Option<String>,

        /// List each presence interval and its contribution.
        #[arg(long)]
        intervals: bool,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Forecast days used after a planned trip.
    Forecast {
        /// First day of the trip (YYYY-MM-DD).
        #[arg(long)]
        start: String,

        /// Day the trip ends (YYYY-MM-DD): the departure date, not counted.
        #[arg(long)]
        end: String,

        /// Travel log file. Falls back to the configured log, then stdin.
        #[arg(short, long)]
        log: Option<PathBuf>,

        /// Day cap to compare against. Overrides the configured threshold.
        #[arg(long)]
        threshold: Option<u64>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the parsed, date-sorted log as JSONL.
    Events {
        /// Travel log file. Falls back to the configured log, then stdin.
        #[arg(short, long)]
        log: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_days_with_global_flags() {
        let cli = Cli::try_parse_from([
            "stay",
            "days",
            "--as-of",
            "2025-06-01",
            "--intervals",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Days {
                as_of, intervals, ..
            }) => {
                assert_eq!(as_of.as_deref(), Some("2025-06-01"));
                assert!(intervals);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn forecast_end_help_says_end_day_is_not_counted() {
        let command = Cli::command();
        let forecast = command.find_subcommand("forecast").unwrap();
        let end = forecast
            .get_arguments()
            .find(|arg| arg.get_id() == "end")
            .unwrap();
        let help = end.get_help().unwrap().to_string();
        assert!(help.contains("departure date, not counted"), "help: {help}");
    }

    #[test]
    fn forecast_requires_trip_dates() {
        assert!(Cli::try_parse_from(["stay", "forecast", "--start", "2024-08-01"]).is_err());
    }
}
