//! Splits captured output into per-logon-session sections

/// Text that opens every logon session block
pub const SECTION_SEPARATOR: &str = "Authentication Id";

/// Splits text into sections on a fixed separator
///
/// The separator itself is dropped. Whatever precedes the first separator
/// comes back as the first section, so callers always get at least one.
pub struct SectionSplitter {
    separator: &'static str,
}

impl SectionSplitter {
    /// Create a splitter for a custom separator
    pub fn new(separator: &'static str) -> Self {
        Self { separator }
    }

    /// Split the given text
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(self.separator).collect()
    }
}

impl Default for SectionSplitter {
    fn default() -> Self {
        Self::new(SECTION_SEPARATOR)
    }
}
