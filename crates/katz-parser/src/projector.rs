//! Turns parsed sections into relationships

use crate::error::KatzError;
use crate::section::{Package, ParsedSection};
use katz_domain::{Fact, Mapper, Relationship};
use tracing::{debug, warn};

/// Package kinds projected, in priority order
pub const PARSE_MODES: [&str; 3] = ["wdigest", "credman", "msv"];

/// Does the value start like a space-separated hex dump (`aa bb cc ...`)?
///
/// Such a password field holds raw bytes rather than a plaintext password.
pub fn looks_like_hash(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 9 {
        return false;
    }
    bytes[..9].chunks(3).all(|group| {
        group[0].is_ascii_hexdigit() && group[1].is_ascii_hexdigit() && group[2] == b' '
    })
}

/// Applies mappers to the first usable package of each kind
pub struct CredentialProjector<'a> {
    mappers: &'a [Mapper],
}

impl<'a> CredentialProjector<'a> {
    /// Create a projector over the given mappers
    pub fn new(mappers: &'a [Mapper]) -> Self {
        Self { mappers }
    }

    /// Project sections into relationships
    ///
    /// Never fails: the first error stops projection, is logged, and the
    /// relationships produced before it are returned.
    pub fn project(&self, sections: &[ParsedSection]) -> Vec<Relationship> {
        let mut relationships = Vec::new();
        if let Err(e) = self.project_into(sections, &mut relationships) {
            warn!(
                target: "parsing_svc",
                "Mimikatz parser encountered an error - {}. Continuing...", e
            );
        }
        relationships
    }

    fn project_into(
        &self,
        sections: &[ParsedSection],
        relationships: &mut Vec<Relationship>,
    ) -> Result<(), KatzError> {
        for section in sections.iter().filter(|s| s.has_reachable_secrets()) {
            for kind in PARSE_MODES {
                let Some(package) = section.first_package(kind) else {
                    continue;
                };

                let password = package.get("Password").map(String::as_str).unwrap_or("");
                if looks_like_hash(password) {
                    debug!(package = kind, user = %section.username, "Skipping package with hex password blob");
                    continue;
                }

                let username = package_username(kind, package)?;
                for mapper in self.mappers {
                    let label = mapper.secret_kind()?.field_label();
                    if let Some(secret) = package.get(label) {
                        relationships.push(Relationship::new(
                            Fact::new(&mapper.source, username),
                            &mapper.edge,
                            Fact::new(&mapper.target, secret),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Username to emit for a package; credman names lose their domain prefix
fn package_username<'p>(kind: &str, package: &'p Package) -> Result<&'p str, KatzError> {
    let username = package
        .get("Username")
        .ok_or_else(|| KatzError::MissingField {
            package: kind.to_string(),
            field: "Username".to_string(),
        })?;

    if kind == "credman" {
        if let Some((_, bare)) = username.split_once('\\') {
            return Ok(bare);
        }
    }
    Ok(username)
}
