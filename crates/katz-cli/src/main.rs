//! Katz CLI - Extract credential relationships from mimikatz output.

use anyhow::Context;
use clap::Parser;
use katz_cli::commands;
use katz_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.as_deref().map(Path::new))
        .context("failed to load settings")?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    debug!(?format, color_enabled, "Settings resolved");
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Parse(args) => {
            commands::execute_parse(args, &config, &formatter).context("parse failed")?;
        }
        Command::Sections(args) => {
            commands::execute_sections(args, &formatter).context("sections failed")?;
        }
        Command::Mappers(args) => {
            commands::execute_mappers(args, &config, &formatter)
                .context("failed to load mappers")?;
        }
    }

    Ok(())
}
