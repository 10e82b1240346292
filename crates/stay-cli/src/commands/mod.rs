//! CLI subcommand implementations.

pub mod days;
pub mod events;
pub mod forecast;
pub mod util;
