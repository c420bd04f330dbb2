//! Mapper module - which relationships to emit from a credential package

use std::fmt;

/// Category of credential material a mapper asks for
///
/// The third dotted segment of a mapper's target descriptor names the kind:
/// `remote.host.ntlm` asks for the NTLM hash, `domain.user.password` for the
/// plaintext password. Unrecognized kinds fall back to the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretKind {
    /// Plaintext password (`Password` field)
    Password,

    /// NTLM hash (`NTLM` field)
    Ntlm,

    /// SHA1 hash (`SHA1` field)
    Sha1,
}

impl SecretKind {
    /// Resolve a descriptor segment to a kind, defaulting to `Password`
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "password" => SecretKind::Password,
            "ntlm" => SecretKind::Ntlm,
            "sha1" => SecretKind::Sha1,
            _ => SecretKind::Password,
        }
    }

    /// Field label that holds this kind of secret inside a package
    pub fn field_label(&self) -> &'static str {
        match self {
            SecretKind::Password => "Password",
            SecretKind::Ntlm => "NTLM",
            SecretKind::Sha1 => "SHA1",
        }
    }
}

/// Errors raised while interpreting a mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    /// Target descriptor has fewer than three dotted segments
    MissingKindSegment(String),
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperError::MissingKindSegment(target) => write!(
                f,
                "target '{}' has no secret kind segment (expected at least three dotted segments)",
                target
            ),
        }
    }
}

impl std::error::Error for MapperError {}

/// One mapping entry: emit `source -[edge]-> target` for each usable package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapper {
    /// Identity descriptor, used verbatim as the source fact's trait
    pub source: String,

    /// Edge label
    pub edge: String,

    /// Secret descriptor, used verbatim as the target fact's trait
    pub target: String,
}

impl Mapper {
    /// Create a new mapper
    pub fn new(
        source: impl Into<String>,
        edge: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            edge: edge.into(),
            target: target.into(),
        }
    }

    /// Secret kind named by the target descriptor's third segment
    pub fn secret_kind(&self) -> Result<SecretKind, MapperError> {
        self.target
            .split('.')
            .nth(2)
            .map(SecretKind::from_segment)
            .ok_or_else(|| MapperError::MissingKindSegment(self.target.clone()))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any target with three or more segments resolves to some kind
        #[test]
        fn test_three_segments_always_resolve(a in "[a-z]{0,8}", b in "[a-z]{0,8}", c in "[a-z0-9_]{0,8}") {
            let mapper = Mapper::new("user.name", "edge", format!("{}.{}.{}", a, b, c));
            prop_assert!(mapper.secret_kind().is_ok());
        }

        /// Property: targets without two dots never resolve
        #[test]
        fn test_short_targets_never_resolve(target in "[a-z]{0,8}(\\.[a-z]{0,8})?") {
            let mapper = Mapper::new("user.name", "edge", target);
            prop_assert!(mapper.secret_kind().is_err());
        }
    }
}
