//! Katz CLI library.
//!
//! Command-line front end for the credential parser: argument parsing,
//! settings, input loading and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
