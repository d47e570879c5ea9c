//! Attribute schema of a property collection.

use indexmap::IndexMap;
use propset_model::{AttributeDefinition, ValueType};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// An attribute hardwired into every property. Built-ins are never stored
/// in the registry and are neither scenario specific, inheritable nor user
/// defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinAttribute {
    pub id: &'static str,
    pub name: &'static str,
    pub value_type: ValueType,
}

pub const BUILTIN_ATTRIBUTES: [BuiltinAttribute; 3] = [
    BuiltinAttribute {
        id: "id",
        name: "ID",
        value_type: ValueType::String,
    },
    BuiltinAttribute {
        id: "name",
        name: "Name",
        value_type: ValueType::String,
    },
    BuiltinAttribute {
        id: "seqno",
        name: "Seq. No.",
        value_type: ValueType::Integer,
    },
];

fn builtin(id: &str) -> Option<&'static BuiltinAttribute> {
    BUILTIN_ATTRIBUTES.iter().find(|b| b.id == id)
}

/// Attribute identifier → definition, in registration order.
///
/// Metadata queries resolve built-ins first, then registered definitions.
/// Unknown identifiers yield `None` or `false`.
#[derive(Debug, Clone, Default)]
pub struct AttributeSchemaRegistry {
    definitions: IndexMap<String, Arc<AttributeDefinition>>,
}

impl AttributeSchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `definition`, replacing an earlier one with the same id in
    /// place. Callers enforce the schema freeze.
    pub(crate) fn insert(&mut self, definition: Arc<AttributeDefinition>) {
        if builtin(&definition.id).is_some() {
            warn!("Attribute '{}' shadows a built-in", definition.id);
        }
        debug!("Registering attribute type {}", definition.id);
        self.definitions.insert(definition.id.clone(), definition);
    }

    pub fn is_builtin(id: &str) -> bool {
        builtin(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<AttributeDefinition>> {
        self.definitions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Registered (non built-in) definitions in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &Arc<AttributeDefinition>> {
        self.definitions.values()
    }

    /// Human readable name of the attribute.
    pub fn attribute_name(&self, id: &str) -> Option<&str> {
        match builtin(id) {
            Some(b) => Some(b.name),
            None => self.get(id).map(|d| d.name.as_str()),
        }
    }

    /// Declared value type of the attribute.
    pub fn attribute_type(&self, id: &str) -> Option<ValueType> {
        match builtin(id) {
            Some(b) => Some(b.value_type),
            None => self.get(id).map(|d| d.value_type),
        }
    }

    pub fn is_scenario_specific(&self, id: &str) -> bool {
        self.registered(id).is_some_and(|d| d.scenario_specific)
    }

    pub fn is_inheritable(&self, id: &str) -> bool {
        self.registered(id).is_some_and(|d| d.inheritable)
    }

    pub fn is_user_defined(&self, id: &str) -> bool {
        self.registered(id).is_some_and(|d| d.user_defined)
    }

    /// Default value of a registered attribute. Built-ins have none.
    pub fn default_value(&self, id: &str) -> Option<&Value> {
        self.registered(id).map(|d| &d.default)
    }

    /// Registered definition unless `id` is taken by a built-in.
    fn registered(&self, id: &str) -> Option<&Arc<AttributeDefinition>> {
        if builtin(id).is_some() {
            return None;
        }
        self.get(id)
    }
}
