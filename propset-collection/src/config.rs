//! Collection configuration, optionally read from a TOML file:
//!
//! ```toml
//! namespace = "hierarchical"
//! duplicates = "reject"
//! debug = false
//! ```

use crate::PropertySetResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// How a property's key in the collection is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespacePolicy {
    /// Key by the property's own id. Ids must be unique collection-wide.
    #[default]
    Flat,
    /// Key by the fully qualified id, so equal ids may live under different
    /// parents.
    Hierarchical,
}

/// What happens when an admitted property resolves to a key that is
/// already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// The new property replaces the old one (last write wins).
    #[default]
    Replace,
    /// Admission fails with [`crate::PropertySetError::DuplicateKey`].
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub namespace: NamespacePolicy,
    pub duplicates: DuplicatePolicy,
    /// Enables programming-error guards such as requiring a project.
    pub debug: bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            namespace: NamespacePolicy::default(),
            duplicates: DuplicatePolicy::default(),
            debug: cfg!(debug_assertions),
        }
    }
}

impl CollectionConfig {
    /// Default config keyed by own ids.
    pub fn flat() -> Self {
        Self::default()
    }

    /// Default config keyed by fully qualified ids.
    pub fn hierarchical() -> Self {
        Self {
            namespace: NamespacePolicy::Hierarchical,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Parses a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> PropertySetResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads a config from a TOML file.
    pub fn load_from(path: impl AsRef<Path>) -> PropertySetResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!("Loaded collection config from {:?}", path);
        Ok(config)
    }

    /// Reads a config from a TOML file, falling back to the defaults when
    /// the file is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No collection config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load collection config {:?}: {}. Falling back to defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }
}
