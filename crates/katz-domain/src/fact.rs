//! Fact module - a single typed value

use std::fmt;

/// A typed value extracted from tool output
///
/// `trait_name` is a dotted descriptor such as `domain.user.name`;
/// `value` is whatever the parser resolved for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    /// Dotted descriptor naming what kind of value this is
    pub trait_name: String,

    /// The resolved value
    pub value: String,
}

impl Fact {
    /// Create a new fact
    pub fn new(trait_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_name: trait_name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.trait_name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_display() {
        let fact = Fact::new("domain.user.name", "alice");
        assert_eq!(fact.to_string(), "domain.user.name=alice");
    }

    #[test]
    fn test_fact_equality_is_structural() {
        assert_eq!(Fact::new("a.b.c", "x"), Fact::new("a.b.c", "x"));
        assert_ne!(Fact::new("a.b.c", "x"), Fact::new("a.b.c", "y"));
    }
}
