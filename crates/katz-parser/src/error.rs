//! Error types for the parser

use katz_domain::MapperError;
use thiserror::Error;

/// Errors that can occur while projecting or configuring
///
/// None of these escape [`BlobParser::parse`](katz_domain::BlobParser::parse);
/// projection failures are logged and absorbed at the projector boundary.
#[derive(Error, Debug)]
pub enum KatzError {
    /// Mapper could not be interpreted
    #[error("Mapper error: {0}")]
    Mapper(#[from] MapperError),

    /// Accepted package lacks a field the projector relies on
    #[error("Missing field '{field}' in {package} package")]
    MissingField {
        /// Package kind being projected
        package: String,
        /// Name of the absent field
        field: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

impl From<toml::de::Error> for KatzError {
    fn from(e: toml::de::Error) -> Self {
        KatzError::TomlParse(e.to_string())
    }
}
