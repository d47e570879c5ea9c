//! Identifier types used throughout propset.
//!
//! A [`PropertyId`] is unique among its siblings. A [`FullId`] joins the ids
//! of all ancestors with `.` and is unique across the whole tree.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the segments of a [`FullId`].
pub const SEPARATOR: char = '.';

/// Identifier of a property within its parent.
///
/// Must start with an ASCII letter or `_` and continue with ASCII
/// alphanumerics, `_` or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PropertyId(String);

impl PropertyId {
    /// Parses and validates a property id.
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(Error::EmptyId)?;
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(Error::InvalidStart(s.to_string()));
        }
        if let Some(found) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-')) {
            return Err(Error::InvalidCharacter {
                id: s.to_string(),
                found,
            });
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PropertyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PropertyId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<PropertyId> for String {
    fn from(id: PropertyId) -> Self {
        id.0
    }
}

impl AsRef<str> for PropertyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fully qualified identifier: the dotted path of property ids from the
/// tree root down to a property, e.g. `project.phase1.design`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullId(String);

impl FullId {
    /// Full id of a property without parent.
    #[must_use]
    pub fn root(id: &PropertyId) -> Self {
        Self(id.0.clone())
    }

    /// Full id of a child named `id` below `self`.
    #[must_use]
    pub fn child(&self, id: &PropertyId) -> Self {
        Self(format!("{}{SEPARATOR}{}", self.0, id.0))
    }

    /// Parses a dotted path, validating every segment.
    pub fn parse(s: &str) -> Result<Self> {
        for segment in s.split(SEPARATOR) {
            PropertyId::parse(segment)?;
        }
        Ok(Self(s.to_string()))
    }

    /// Iterates the path segments from the root down.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// The last segment, i.e. the property's own id.
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.0.rsplit(SEPARATOR).next().unwrap_or(&self.0)
    }

    /// Full id of the parent, or `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(parent, _)| Self(parent.to_string()))
    }

    /// Zero-based depth of the addressed property (roots are at 0).
    #[must_use]
    pub fn level(&self) -> usize {
        self.0.matches(SEPARATOR).count()
    }

    /// Returns the full id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FullId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FullId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<FullId> for String {
    fn from(id: FullId) -> Self {
        id.0
    }
}

impl AsRef<str> for FullId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
