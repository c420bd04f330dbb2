//! Katz Parser
//!
//! Extracts credential relationships from the captured output of
//! `mimikatz.exe privilege::debug sekurlsa::logonpasswords exit`.
//!
//! # Overview
//!
//! The output is loosely formatted text: one block per logon session, each
//! with a header (session, user, domain, logon server...) followed by
//! authentication packages (`msv`, `wdigest`, `credman`, ...) holding
//! `* Key : Value` lines. The parser pulls usable credentials out of that
//! text and turns them into [`Relationship`](katz_domain::Relationship)s
//! according to the configured mappers.
//!
//! # Architecture
//!
//! ```text
//! Text → SectionSplitter → SectionParser (per section) → CredentialProjector → Relationships
//! ```
//!
//! Parsing is best-effort. Lines that match nothing are ignored, packages
//! without a username and a secret are dropped, and a failure while
//! projecting is logged and cut short rather than returned.
//!
//! # Example Usage
//!
//! ```
//! use katz_domain::{BlobParser, Mapper};
//! use katz_parser::KatzParser;
//!
//! let parser = KatzParser::from_mappers(vec![
//!     Mapper::new("domain.user.name", "has_hash", "domain.user.ntlm"),
//! ]);
//!
//! let output = "Authentication Id : 0 ; 12345\n\
//!               Logon Server : DC1\n\
//!               msv :\n \
//!               * Username : alice\n \
//!               * NTLM : aabbccddeeff00112233445566778899\n";
//!
//! let relationships = parser.parse(output);
//! assert_eq!(relationships.len(), 1);
//! assert_eq!(relationships[0].source.value, "alice");
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod splitter;
mod section;
mod projector;
mod parser;


pub use error::KatzError;
pub use config::{FactConfig, MapperConfig, ParserConfig};
pub use splitter::{SectionSplitter, SECTION_SEPARATOR};
pub use section::{
    parse_section, Package, ParsedSection, SectionParser, NULL_SENTINEL,
};
pub use projector::{looks_like_hash, CredentialProjector, PARSE_MODES};
pub use parser::KatzParser;
