use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use stay_core::Trip;
use tracing_subscriber::EnvFilter;

use stay_cli::commands::days::DaysOptions;
use stay_cli::commands::{days, events, forecast, util};
use stay_cli::{Cli, Commands, Config};

/// Reads the travel log from `--log`, the configured default, or stdin.
fn load_log(log: Option<&Path>, config: &Config) -> Result<String> {
    let path = log.or(config.travel_log.as_deref());
    util::read_log(path, std::io::stdin().lock())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Days {
            log,
            as_of,
            intervals,
            json,
        }) => {
            let options = DaysOptions {
                as_of: util::resolve_as_of(as_of.as_deref())?,
                show_intervals: *intervals,
                json: *json,
            };
            let text = load_log(log.as_deref(), &config)?;
            days::run(&mut out, &text, options, &config)?;
        }
        Some(Commands::Forecast {
            start,
            end,
            log,
            threshold,
            json,
        }) => {
            let start = util::parse_date_arg(start, "start")?;
            let end = util::parse_date_arg(end, "end")?;
            let trip = Trip::new(start, end)?;
            let text = load_log(log.as_deref(), &config)?;
            forecast::run(&mut out, &text, trip, *threshold, *json, &config)?;
        }
        Some(Commands::Events { log }) => {
            let text = load_log(log.as_deref(), &config)?;
            events::run(&mut out, &text)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
