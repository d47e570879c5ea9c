use crate::config::{CollectionConfig, DuplicatePolicy, NamespacePolicy};
use crate::registry::AttributeSchemaRegistry;
use crate::{PropertySetError, PropertySetResult, wbs};
use indexmap::IndexMap;
use indexmap::map::Values;
use propset_model::{
    AttributeDefinition, Project, PropertyNode, PropertyRef, PropertyTreeNode, ValueType,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// A collection of properties of the same kind sharing one attribute schema.
///
/// Properties are held by shared handle; the trees they belong to own them.
/// Iteration follows admission order. Re-admitting a key keeps the key's
/// original position.
#[derive(Debug)]
pub struct PropertyCollection<N: PropertyNode = PropertyTreeNode> {
    project: Option<Arc<Project>>,
    config: CollectionConfig,
    schema: AttributeSchemaRegistry,
    properties: IndexMap<String, PropertyRef<N>>,
    top_level_items: usize,
}

impl<N: PropertyNode> PropertyCollection<N> {
    /// Creates an empty collection.
    ///
    /// Fails with [`PropertySetError::MissingProject`] if `config.debug` is
    /// set and no project is given.
    pub fn new(project: Option<Arc<Project>>, config: CollectionConfig) -> PropertySetResult<Self> {
        if config.debug && project.is_none() {
            return Err(PropertySetError::MissingProject);
        }
        Ok(Self {
            project,
            config,
            schema: AttributeSchemaRegistry::new(),
            properties: IndexMap::new(),
            top_level_items: 0,
        })
    }

    pub fn project(&self) -> Option<&Arc<Project>> {
        self.project.as_ref()
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn namespace(&self) -> NamespacePolicy {
        self.config.namespace
    }

    pub fn schema(&self) -> &AttributeSchemaRegistry {
        &self.schema
    }

    // ── Schema ───────────────────────────────────────────────────

    /// Declares an attribute that properties of this collection carry.
    ///
    /// All attribute types must be declared before the first property is
    /// added; afterwards this fails with [`PropertySetError::SchemaFrozen`]
    /// until the collection is cleared.
    pub fn add_attribute_type(
        &mut self,
        definition: impl Into<Arc<AttributeDefinition>>,
    ) -> PropertySetResult<()> {
        let definition = definition.into();
        if !self.properties.is_empty() {
            return Err(PropertySetError::SchemaFrozen {
                attribute: definition.id.clone(),
                properties: self.properties.len(),
            });
        }
        self.schema.insert(definition);
        Ok(())
    }

    /// Registered attribute definitions in registration order.
    pub fn attribute_definitions(&self) -> impl Iterator<Item = &Arc<AttributeDefinition>> {
        self.schema.definitions()
    }

    pub fn attribute_name(&self, id: &str) -> Option<&str> {
        self.schema.attribute_name(id)
    }

    pub fn attribute_type(&self, id: &str) -> Option<ValueType> {
        self.schema.attribute_type(id)
    }

    pub fn is_scenario_specific(&self, id: &str) -> bool {
        self.schema.is_scenario_specific(id)
    }

    pub fn is_inheritable(&self, id: &str) -> bool {
        self.schema.is_inheritable(id)
    }

    pub fn is_user_defined(&self, id: &str) -> bool {
        self.schema.is_user_defined(id)
    }

    pub fn default_value(&self, id: &str) -> Option<&Value> {
        self.schema.default_value(id)
    }

    // ── Properties ───────────────────────────────────────────────

    /// Key under which `property` is stored for this collection's
    /// namespace policy.
    pub fn key_of(&self, property: &N) -> String {
        match self.config.namespace {
            NamespacePolicy::Flat => property.id().to_string(),
            NamespacePolicy::Hierarchical => property.full_id().to_string(),
        }
    }

    /// Admits `property`, declaring every registered attribute on it.
    ///
    /// A property whose key is already present replaces the earlier one,
    /// unless the collection is configured with [`DuplicatePolicy::Reject`].
    /// A rejected property is left untouched.
    pub fn add_property(&mut self, property: PropertyRef<N>) -> PropertySetResult<()> {
        let (key, top_level) = {
            let p = property.borrow();
            (self.key_of(&p), p.parent().is_none())
        };

        if self.properties.contains_key(&key) {
            match self.config.duplicates {
                DuplicatePolicy::Reject => return Err(PropertySetError::DuplicateKey { key }),
                DuplicatePolicy::Replace => debug!("Replacing property {}", key),
            }
        }

        {
            let mut p = property.borrow_mut();
            for definition in self.schema.definitions() {
                p.declare_attribute(definition);
            }
        }

        self.properties.insert(key, property);
        if top_level {
            self.top_level_items += 1;
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&PropertyRef<N>> {
        self.properties.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Number of admitted properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Number of admissions of properties without a parent.
    pub fn top_level_items(&self) -> usize {
        self.top_level_items
    }

    /// Sequence number for the next top-level property.
    pub fn next_top_level_seq_no(&self) -> usize {
        self.top_level_items + 1
    }

    pub fn iter(&self) -> Values<'_, String, PropertyRef<N>> {
        self.properties.values()
    }

    /// Handles of all properties in admission order.
    pub fn values(&self) -> Vec<PropertyRef<N>> {
        self.properties.values().cloned().collect()
    }

    /// Removes all properties. The schema is kept and may be extended again.
    pub fn clear(&mut self) {
        debug!("Clearing {} properties", self.properties.len());
        self.properties.clear();
        self.top_level_items = 0;
    }

    /// Lets every property inherit unset scenario attributes from the parent
    /// scenario.
    pub fn inherit_attributes_from_scenario(&self) {
        for property in self.properties.values() {
            property.borrow_mut().inherit_attributes_from_scenario();
        }
    }

    // ── WBS ──────────────────────────────────────────────────────

    /// Sets the `wbs` and `tree` attributes of every property. See [`wbs`].
    pub fn index(&self) -> usize {
        wbs::index(self)
    }

    /// Deepest tree level over all properties plus one; at least 1.
    pub fn max_depth(&self) -> usize {
        wbs::max_depth(self)
    }
}

impl<'a, N: PropertyNode> IntoIterator for &'a PropertyCollection<N> {
    type Item = &'a PropertyRef<N>;
    type IntoIter = Values<'a, String, PropertyRef<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.values()
    }
}
