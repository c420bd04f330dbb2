//! Relationship module - an identity linked to a secret

use crate::Fact;
use std::fmt;

/// A directed relationship between two facts
///
/// The parser emits one of these per (section, package kind, mapper)
/// combination that resolves, e.g. `domain.user.name=alice -[has_hash]->
/// domain.user.ntlm=aabb...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relationship {
    /// Identity side of the edge
    pub source: Fact,

    /// Edge label taken from the mapper
    pub edge: String,

    /// Secret side of the edge
    pub target: Fact,
}

impl Relationship {
    /// Create a new relationship
    pub fn new(source: Fact, edge: impl Into<String>, target: Fact) -> Self {
        Self {
            source,
            edge: edge.into(),
            target,
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.source, self.edge, self.target)
    }
}
