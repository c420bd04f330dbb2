//! Command implementations.

pub mod mappers;
pub mod parse;
pub mod sections;

pub use self::mappers::execute_mappers;
pub use self::parse::execute_parse;
pub use self::sections::execute_sections;

use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use katz_parser::ParserConfig;
use std::fs;
use std::io::{self, Read};

/// Read captured tool output from a file or stdin.
///
/// Invalid UTF-8 is replaced rather than rejected; console captures are
/// not always clean.
pub fn read_input(args: &InputArgs) -> Result<String> {
    let bytes = if args.stdin {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    } else if let Some(file_path) = &args.file {
        fs::read(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either a file or --stdin".to_string(),
        ));
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Resolve the parser configuration: `--mappers`, then the settings file,
/// then the built-in defaults.
pub fn load_parser_config(mappers: Option<&str>, config: &Config) -> Result<ParserConfig> {
    match mappers.or(config.mappers_file.as_deref()) {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            Ok(ParserConfig::from_toml(&contents)?)
        }
        None => Ok(ParserConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Authentication Id : 0 ; 1\n\xffmsv :\n").unwrap();

        let args = InputArgs {
            file: Some(file.path().to_string_lossy().into_owned()),
            stdin: false,
        };
        let text = read_input(&args).unwrap();
        assert!(text.starts_with("Authentication Id"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_read_input_requires_source() {
        let args = InputArgs { file: None, stdin: false };
        assert!(matches!(read_input(&args), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_load_parser_config_default() {
        let config = load_parser_config(None, &Config::default()).unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_load_parser_config_from_settings() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[mappers]]\nsource = \"user.name\"\nedge = \"has_hash\"\ntarget = \"remote.host.ntlm\""
        )
        .unwrap();

        let config = Config {
            mappers_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        let parser_config = load_parser_config(None, &config).unwrap();
        assert_eq!(parser_config.mappers.len(), 1);
        assert_eq!(parser_config.mappers[0].target, "remote.host.ntlm");
    }

    #[test]
    fn test_load_parser_config_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[mappers]]\nsource = \"\"\nedge = \"e\"\ntarget = \"a.b.c\"").unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let result = load_parser_config(Some(&path), &Config::default());
        assert!(matches!(result, Err(CliError::Parser(_))));
    }
}
