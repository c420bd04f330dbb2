//! Per-section parsing: a header block followed by authentication packages
//!
//! A section looks like this once the separator is stripped:
//!
//! ```text
//!  : 0 ; 996 (00000000:000003e4)
//! Session           : Service from 0
//! User Name         : WS01$
//! Domain            : CORP
//! Logon Server      : (null)
//! Logon Time        : 1/1/2024 9:00:00 AM
//! SID               : S-1-5-20
//!         msv :
//!          [00000003] Primary
//!          * Username : WS01$
//!          * Domain   : CORP
//!          * NTLM     : 31d6cfe0d16ae931b73c59d7e0c089c0
//!         wdigest :
//!          * Username : WS01$
//!          * Domain   : CORP
//!          * Password : (null)
//! ```
//!
//! [`SectionParser`] reads it one line at a time. Header lines fill the
//! [`ParsedSection`] fields until the first `msv` line; from there on every
//! line is either a package-name line (`wdigest :`), an account marker
//! (`[00000003] Primary`), a field line (`* Key : Value`) or noise.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Value the tool prints for an absent field
pub const NULL_SENTINEL: &str = "(null)";

/// First package listed after the header
const BODY_START: &str = "msv";

/// Fields of one credential package, keyed by field name
pub type Package = BTreeMap<String, String>;

/// Everything extracted from one logon session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedSection {
    /// Logon session type (`Interactive`, `Service from 0`, ...)
    pub session: String,

    /// Account name from the header
    pub username: String,

    /// Account domain from the header
    pub domain: String,

    /// Server that authenticated the session, `(null)` for local logons
    pub logon_server: String,

    /// Logon timestamp as printed
    pub logon_time: String,

    /// Account SID
    pub sid: String,

    /// Accepted packages by package name, in discovery order
    pub packages: BTreeMap<String, Vec<Package>>,
}

impl ParsedSection {
    /// First accepted package with the given name
    pub fn first_package(&self, name: &str) -> Option<&Package> {
        self.packages.get(name).and_then(|packages| packages.first())
    }

    /// Whether at least one package with the given name was accepted
    pub fn has_package(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Total number of accepted packages across all names
    pub fn package_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }

    /// Whether this session can carry secrets worth projecting
    ///
    /// Sessions without a logon server only hold useful material when the
    /// credential manager has entries.
    pub fn has_reachable_secrets(&self) -> bool {
        self.logon_server != NULL_SENTINEL || self.has_package("credman")
    }

    fn set_header(&mut self, field: HeaderField, value: &str) {
        let slot = match field {
            HeaderField::Session => &mut self.session,
            HeaderField::UserName => &mut self.username,
            HeaderField::Domain => &mut self.domain,
            HeaderField::LogonServer => &mut self.logon_server,
            HeaderField::LogonTime => &mut self.logon_time,
            HeaderField::Sid => &mut self.sid,
        };
        *slot = value.to_string();
    }
}

#[derive(Debug, Clone, Copy)]
enum HeaderField {
    Session,
    UserName,
    Domain,
    LogonServer,
    LogonTime,
    Sid,
}

const HEADER_FIELDS: [(&str, HeaderField); 6] = [
    ("Session", HeaderField::Session),
    ("User Name", HeaderField::UserName),
    ("Domain", HeaderField::Domain),
    ("Logon Server", HeaderField::LogonServer),
    ("Logon Time", HeaderField::LogonTime),
    ("SID", HeaderField::Sid),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Header,
    Body,
}

/// What a body line means to the package accumulator
#[derive(Debug, PartialEq, Eq)]
enum BodyLine<'a> {
    /// `[...]` marker: a new account inside the current package type
    AccountMarker,
    /// `* Key : Value`
    Field { key: &'a str, value: &'a str },
    /// `name :` opening a new package type
    PackageStart(&'a str),
    /// Anything else
    Ignored,
}

impl<'a> BodyLine<'a> {
    fn classify(line: &'a str) -> Self {
        if line.starts_with('[') {
            return BodyLine::AccountMarker;
        }
        if let Some(rest) = line.strip_prefix('*') {
            return match field_line(rest) {
                Some((key, value)) => BodyLine::Field { key, value },
                None => BodyLine::Ignored,
            };
        }
        match package_name(line) {
            Some(name) => BodyLine::PackageStart(name),
            None => BodyLine::Ignored,
        }
    }
}

/// Package being read, plus the name it will be stored under
#[derive(Debug, Default)]
struct PendingPackage {
    name: String,
    fields: Package,
}

/// Line-by-line state machine for one section
#[derive(Debug)]
pub struct SectionParser {
    phase: Phase,
    pending: PendingPackage,
    section: ParsedSection,
}

impl SectionParser {
    /// Create a parser in the header phase
    pub fn new() -> Self {
        Self {
            phase: Phase::Header,
            pending: PendingPackage::default(),
            section: ParsedSection::default(),
        }
    }

    /// Consume one line of the section
    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim();

        if self.phase == Phase::Header {
            if !line.starts_with(BODY_START) {
                self.read_header(line);
                return;
            }
            self.phase = Phase::Body;
        }

        self.read_body(line);
    }

    /// Flush the pending package and return the section
    pub fn finish(mut self) -> ParsedSection {
        self.flush();
        self.section
    }

    fn read_header(&mut self, line: &str) {
        for (label, field) in HEADER_FIELDS {
            if let Some(value) = header_value(line, label) {
                self.section.set_header(field, value);
            }
        }
    }

    fn read_body(&mut self, line: &str) {
        match BodyLine::classify(line) {
            BodyLine::AccountMarker => self.flush(),
            BodyLine::Field { key, value } => {
                self.pending.fields.insert(key.to_string(), value.to_string());
            }
            BodyLine::PackageStart(name) => {
                self.flush();
                self.pending.name = name.to_string();
            }
            BodyLine::Ignored => {}
        }
    }

    /// Store the pending package if it is usable and start an empty one
    /// under the same name
    fn flush(&mut self) {
        let fields = std::mem::take(&mut self.pending.fields);
        if is_usable(&fields) {
            debug!(package = %self.pending.name, "Accepted credential package");
            self.section
                .packages
                .entry(self.pending.name.clone())
                .or_default()
                .push(fields);
        } else if !fields.is_empty() {
            debug!(
                package = %self.pending.name,
                fields = fields.len(),
                "Discarded package without username and secret"
            );
        }
    }
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the lines of one section
pub fn parse_section(text: &str) -> ParsedSection {
    let mut parser = SectionParser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// A package is usable with a real username and either a real password
/// or an NTLM hash
fn is_usable(package: &Package) -> bool {
    let present = |key: &str| {
        package
            .get(key)
            .is_some_and(|value| !value.is_empty() && value != NULL_SENTINEL)
    };
    present("Username") && (present("Password") || package.contains_key("NTLM"))
}

/// Match `<label> : <value>` at the start of a header line
fn header_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.trim_start()
        .strip_prefix(label)?
        .trim_start()
        .strip_prefix(':')
        .map(str::trim)
}

/// Split the remainder of a `*` line into key and value
///
/// The key runs up to the first `": "`; the value is everything after it.
fn field_line(rest: &str) -> Option<(&str, &str)> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let idx = rest.find(": ")?;
    Some((rest[..idx].trim(), &rest[idx + 2..]))
}

/// Lowercase package name at line start followed by `" :"`
fn package_name(line: &str) -> Option<&str> {
    let end = line
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(line.len());
    if end == 0 || !line[end..].starts_with(" :") {
        return None;
    }
    Some(&line[..end])
}
