//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use katz_domain::Relationship;
use katz_parser::ParsedSection;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format relationships output.
    pub fn format_relationships(&self, relationships: &[Relationship]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_relationships_json(relationships),
            OutputFormat::Table => Ok(self.format_relationships_table(relationships)),
            OutputFormat::Quiet => Ok(self.format_relationships_quiet(relationships)),
        }
    }

    /// Format parsed sections output.
    pub fn format_sections(&self, sections: &[ParsedSection]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(sections)?),
            OutputFormat::Table => Ok(self.format_sections_table(sections)),
            OutputFormat::Quiet => Ok(sections
                .iter()
                .map(|s| format!("{}\\{}", s.domain, s.username))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format relationships as JSON.
    fn format_relationships_json(&self, relationships: &[Relationship]) -> Result<String> {
        let json: Vec<serde_json::Value> = relationships
            .iter()
            .map(|r| {
                serde_json::json!({
                    "source": { "trait": r.source.trait_name, "value": r.source.value },
                    "edge": r.edge,
                    "target": { "trait": r.target.trait_name, "value": r.target.value },
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json)?)
    }

    /// Format relationships as a table.
    fn format_relationships_table(&self, relationships: &[Relationship]) -> String {
        if relationships.is_empty() {
            return self.colorize("No credentials found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Source", "Value", "Edge", "Target", "Secret"]);

        for rel in relationships {
            builder.push_record([
                rel.source.trait_name.as_str(),
                rel.source.value.as_str(),
                rel.edge.as_str(),
                rel.target.trait_name.as_str(),
                rel.target.value.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format relationships in quiet mode (one tab-separated line each).
    fn format_relationships_quiet(&self, relationships: &[Relationship]) -> String {
        relationships
            .iter()
            .map(|r| format!("{}\t{}\t{}", r.source.value, r.edge, r.target.value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format sections as a table.
    fn format_sections_table(&self, sections: &[ParsedSection]) -> String {
        if sections.is_empty() {
            return self.colorize("No sections with credentials found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Session", "User", "Domain", "Logon Server", "SID", "Packages"]);

        for section in sections {
            let packages = section
                .packages
                .iter()
                .map(|(name, found)| format!("{}({})", name, found.len()))
                .collect::<Vec<_>>()
                .join(", ");
            builder.push_record([
                section.session.clone(),
                section.username.clone(),
                section.domain.clone(),
                section.logon_server.clone(),
                section.sid.clone(),
                packages,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katz_domain::Fact;
    use std::collections::BTreeMap;

    fn create_test_relationship() -> Relationship {
        Relationship::new(
            Fact::new("domain.user.name", "alice"),
            "has_hash",
            Fact::new("domain.user.ntlm", "58a478135a93ac3bf058a5ea0e8fdb71"),
        )
    }

    fn create_test_section() -> ParsedSection {
        let mut package = BTreeMap::new();
        package.insert("Username".to_string(), "alice".to_string());
        package.insert("NTLM".to_string(), "58a4".to_string());

        let mut packages = BTreeMap::new();
        packages.insert("msv".to_string(), vec![package]);

        ParsedSection {
            session: "Interactive from 1".to_string(),
            username: "alice".to_string(),
            domain: "CORP".to_string(),
            logon_server: "DC01".to_string(),
            packages,
            ..Default::default()
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_relationships(&[create_test_relationship()])
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["source"]["value"], "alice");
        assert_eq!(parsed[0]["edge"], "has_hash");
        assert_eq!(parsed[0]["target"]["trait"], "domain.user.ntlm");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_relationships(&[create_test_relationship()])
            .unwrap();
        assert_eq!(output, "alice\thas_hash\t58a478135a93ac3bf058a5ea0e8fdb71");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_relationships(&[create_test_relationship()])
            .unwrap();
        assert!(output.contains("Edge"));
        assert!(output.contains("has_hash"));
    }

    #[test]
    fn test_empty_relationships() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_relationships(&[]).unwrap();
        assert!(output.contains("No credentials found"));
    }

    #[test]
    fn test_sections_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_sections(&[create_test_section()]).unwrap();
        assert!(output.contains("Logon Server"));
        assert!(output.contains("msv(1)"));
    }

    #[test]
    fn test_sections_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_sections(&[create_test_section()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["packages"]["msv"][0]["NTLM"], "58a4");
    }

    #[test]
    fn test_sections_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_sections(&[create_test_section()]).unwrap();
        assert_eq!(output, "CORP\\alice");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
