//! Command-line shell of the registry administration console

pub mod cli;
pub mod commands;
pub mod infrastructure;
pub mod presentation;
pub mod schema;

pub use infrastructure::{CliError, LogConfig, Result};
