//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::commands::{load_parser_config, read_input};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use katz_domain::BlobParser;
use katz_parser::KatzParser;

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let parser_config = load_parser_config(args.mappers.as_deref(), config)?;
    if parser_config.mappers.is_empty() {
        eprintln!("{}", formatter.warning("No mappers configured; nothing will be emitted"));
    }

    let blob = read_input(&args.input)?;
    let parser = KatzParser::new(&parser_config);
    let relationships = parser.parse(&blob);

    println!("{}", formatter.format_relationships(&relationships)?);

    Ok(())
}
