//! Katz Domain Layer
//!
//! Value objects shared by the credential parser and everything that
//! consumes its output. This crate has no third-party runtime dependencies.
//!
//! ## Key Concepts
//!
//! - **Fact**: a typed value, e.g. `domain.user.name = alice`
//! - **Relationship**: a source fact linked to a target fact by a named edge
//! - **Mapper**: a configured (source, edge, target) triple telling the parser
//!   which relationships to emit
//! - **SecretKind**: the category of credential material a mapper asks for

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fact;
pub mod mapper;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use fact::Fact;
pub use mapper::{Mapper, MapperError, SecretKind};
pub use relationship::Relationship;
pub use traits::BlobParser;
