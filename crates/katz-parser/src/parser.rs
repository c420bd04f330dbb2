//! The parser entry point

use crate::config::ParserConfig;
use crate::projector::CredentialProjector;
use crate::section::{parse_section, ParsedSection};
use crate::splitter::SectionSplitter;
use katz_domain::{BlobParser, Fact, Mapper, Relationship};
use tracing::{debug, info};

/// Parses `sekurlsa::logonpasswords` output into relationships
pub struct KatzParser {
    mappers: Vec<Mapper>,
    used_facts: Vec<Fact>,
    splitter: SectionSplitter,
}

impl KatzParser {
    /// Create a parser from configuration
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            mappers: config.mappers(),
            used_facts: config.used_facts(),
            splitter: SectionSplitter::default(),
        }
    }

    /// Create a parser from mappers alone
    pub fn from_mappers(mappers: Vec<Mapper>) -> Self {
        Self {
            mappers,
            used_facts: Vec::new(),
            splitter: SectionSplitter::default(),
        }
    }

    /// Configured mappers, in emission order
    pub fn mappers(&self) -> &[Mapper] {
        &self.mappers
    }

    /// Facts the caller already used
    pub fn used_facts(&self) -> &[Fact] {
        &self.used_facts
    }

    /// Split the blob and parse each section, keeping only sections with
    /// at least one usable package
    pub fn parse_sections(&self, blob: &str) -> Vec<ParsedSection> {
        let raw_sections = self.splitter.split(blob);
        let total = raw_sections.len();

        let sections: Vec<ParsedSection> = raw_sections
            .into_iter()
            .map(parse_section)
            .filter(|section| !section.packages.is_empty())
            .collect();

        debug!("Kept {} of {} sections", sections.len(), total);
        sections
    }
}

impl BlobParser for KatzParser {
    fn parse(&self, blob: &str) -> Vec<Relationship> {
        let sections = self.parse_sections(blob);
        let relationships = CredentialProjector::new(&self.mappers).project(&sections);

        info!(
            "Parsed {} credential sections into {} relationships",
            sections.len(),
            relationships.len()
        );
        relationships
    }
}

impl Default for KatzParser {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}
