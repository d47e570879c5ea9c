//! Property model for propset.
//!
//! Defines the collaborators a property collection works with:
//! - [`AttributeDefinition`] — schema metadata for one typed attribute
//! - [`ValueType`] — the declared type of an attribute
//! - [`PropertyNode`] — the contract a tree node must satisfy to be admitted
//! - [`PropertyTreeNode`] — the stock tree node with per-scenario attributes
//! - [`Project`] — the owning context and its scenario tree
//!
//! Attribute values are plain [`serde_json::Value`]s; `Value::Null` means
//! "no value".

mod node;
mod project;
mod schema;
mod tree;

pub use node::{PropertyNode, PropertyRef};
pub use project::{Project, Scenario};
pub use schema::{AttributeDefinition, ValueType};
pub use tree::PropertyTreeNode;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building the model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("scenario '{0}' is already defined")]
    DuplicateScenario(String),

    #[error("unknown parent scenario '{0}'")]
    UnknownScenario(String),

    #[error("scenario '{scenario}' refers to parent #{parent}, which is not defined before it")]
    ScenarioOrder { scenario: String, parent: usize },
}
