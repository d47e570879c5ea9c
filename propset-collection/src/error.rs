//! Error types for property collections.

use thiserror::Error;

/// Result type for collection operations.
pub type PropertySetResult<T> = Result<T, PropertySetError>;

/// Errors that can occur while building a property collection.
///
/// `SchemaFrozen` and `MissingProject` report misuse by the caller, not bad
/// input data.
#[derive(Debug, Error)]
pub enum PropertySetError {
    /// An attribute type was registered after properties were added.
    #[error(
        "attribute types must be defined before properties are added \
         (attribute '{attribute}', {properties} properties present)"
    )]
    SchemaFrozen { attribute: String, properties: usize },

    /// The collection was constructed in debug mode without a project.
    #[error("project may not be absent in debug mode")]
    MissingProject,

    /// A property resolved to a key that is already taken and the
    /// collection rejects duplicates.
    #[error("duplicate property key: {key}")]
    DuplicateKey { key: String },

    /// IO error while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
