//! Presence day counter CLI library.
//!
//! This crate provides the CLI interface around `stay-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
