//! Core type definitions for propset.
//!
//! This crate defines the identifier types shared by the model and the
//! collection crates:
//! - Property identifiers ([`PropertyId`]), the name a property carries
//!   within its parent
//! - Fully qualified identifiers ([`FullId`]), the dotted ancestry path that
//!   makes a property unique across the whole tree
//!
//! Attribute schemas, tree nodes and the collection itself live in
//! `propset-model` and `propset-collection`.

mod ids;

pub use ids::{FullId, PropertyId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("property id may not be empty")]
    EmptyId,

    #[error("invalid property id '{id}': unexpected character '{found}'")]
    InvalidCharacter { id: String, found: char },

    #[error("invalid property id '{0}': must start with a letter or '_'")]
    InvalidStart(String),
}
