//! Sections command implementation.

use crate::cli::InputArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use katz_parser::KatzParser;

/// Execute the sections command.
pub fn execute_sections(args: InputArgs, formatter: &Formatter) -> Result<()> {
    let blob = read_input(&args)?;
    let sections = KatzParser::from_mappers(Vec::new()).parse_sections(&blob);

    println!("{}", formatter.format_sections(&sections)?);

    Ok(())
}
