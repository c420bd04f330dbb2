//! Mappers command implementation.

use crate::cli::MappersArgs;
use crate::commands::load_parser_config;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the mappers command.
pub fn execute_mappers(args: MappersArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let parser_config = load_parser_config(args.mappers.as_deref(), config)?;

    for (idx, mapper) in parser_config.mappers().iter().enumerate() {
        if let Err(e) = mapper.secret_kind() {
            eprintln!("{}", formatter.warning(&format!("mapper {}: {}", idx, e)));
        }
    }

    print!("{}", parser_config.to_toml()?);
    eprintln!(
        "{}",
        formatter.success(&format!("{} mapper(s) loaded", parser_config.mappers.len()))
    );

    Ok(())
}
