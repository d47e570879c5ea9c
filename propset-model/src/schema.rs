use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema metadata for one attribute that every property of a collection
/// may carry.
///
/// Definitions are shared between the schema registry and every node that
/// declares them, so they are handed around as `Arc<AttributeDefinition>` and
/// never mutated after registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Attribute identifier (e.g., "start", "effort", "wbs").
    pub id: String,
    /// Human readable name used in reports.
    pub name: String,
    pub value_type: ValueType,
    /// Whether each scenario keeps its own value.
    #[serde(default)]
    pub scenario_specific: bool,
    /// Whether children inherit the value from their parent property.
    #[serde(default)]
    pub inheritable: bool,
    /// Whether the attribute was declared by the user rather than built in.
    #[serde(default)]
    pub user_defined: bool,
    /// Value a freshly declared attribute starts out with.
    #[serde(default)]
    pub default: Value,
}

impl AttributeDefinition {
    pub fn new(id: &str, name: &str, value_type: ValueType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value_type,
            scenario_specific: false,
            inheritable: false,
            user_defined: false,
            default: Value::Null,
        }
    }

    /// Shorthand for a string attribute.
    pub fn string(id: &str, name: &str) -> Self {
        Self::new(id, name, ValueType::String)
    }

    /// Shorthand for an integer attribute.
    pub fn integer(id: &str, name: &str) -> Self {
        Self::new(id, name, ValueType::Integer)
    }

    /// Shorthand for a date attribute.
    pub fn date(id: &str, name: &str) -> Self {
        Self::new(id, name, ValueType::Date)
    }

    #[must_use]
    pub fn scenario_specific(mut self) -> Self {
        self.scenario_specific = true;
        self
    }

    #[must_use]
    pub fn inheritable(mut self) -> Self {
        self.inheritable = true;
        self
    }

    #[must_use]
    pub fn user_defined(mut self) -> Self {
        self.user_defined = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }
}

/// The declared value type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    Duration,
    /// Reference to another property by full id.
    Reference,
    List,
    Json,
}
