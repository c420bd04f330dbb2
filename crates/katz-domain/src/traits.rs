//! Trait definitions for the parsing boundary
//!
//! Pipelines that collect tool output call parsers through this trait;
//! implementations live in other crates.

use crate::Relationship;

/// Trait for turning captured tool output into relationships
///
/// Implemented by the application layer (katz-parser). Parsing is
/// best-effort: implementations absorb their own failures and return
/// whatever they managed to extract, possibly nothing.
pub trait BlobParser {
    /// Parse a blob of captured output
    fn parse(&self, blob: &str) -> Vec<Relationship>;
}
