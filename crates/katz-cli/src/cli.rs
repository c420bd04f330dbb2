//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Katz - Extract credential relationships from mimikatz logonpasswords output.
#[derive(Debug, Parser)]
#[command(name = "katz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Settings file path (defaults to ~/.katz/config.toml)
    #[arg(short, long, global = true, env = "KATZ_CONFIG")]
    pub config: Option<String>,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (tab-separated values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract relationships from captured output
    Parse(ParseArgs),

    /// Show parsed sections without applying mappers
    Sections(InputArgs),

    /// Print the effective mapper configuration
    Mappers(MappersArgs),
}

/// Where to read captured output from.
#[derive(Debug, clap::Args)]
pub struct InputArgs {
    /// File containing captured output
    pub file: Option<String>,

    /// Read captured output from stdin
    #[arg(long, conflicts_with = "file")]
    pub stdin: bool,
}

/// Arguments for the parse command.
#[derive(Debug, clap::Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// TOML file with [[mappers]] entries
    #[arg(short, long)]
    pub mappers: Option<String>,
}

/// Arguments for the mappers command.
#[derive(Debug, clap::Args)]
pub struct MappersArgs {
    /// TOML file with [[mappers]] entries
    #[arg(short, long)]
    pub mappers: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
