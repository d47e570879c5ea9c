//! The stock property tree node.
//!
//! Children are owned by their parent; the back-reference to the parent is
//! weak so a tree is dropped together with its roots. Every node keeps one
//! attribute table for scenario-independent values and one table per
//! project scenario for scenario-specific values.

use crate::{AttributeDefinition, Project, PropertyNode, PropertyRef};
use indexmap::IndexMap;
use propset_types::PropertyId;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
struct AttributeSlot {
    value: Value,
    /// Set explicitly rather than defaulted or inherited.
    provided: bool,
}

impl AttributeSlot {
    fn declared(definition: &AttributeDefinition) -> Self {
        Self {
            value: definition.default.clone(),
            provided: false,
        }
    }

    fn provided(value: Value) -> Self {
        Self {
            value,
            provided: true,
        }
    }
}

/// A node in a property tree (task, resource, account, ...).
#[derive(Debug)]
pub struct PropertyTreeNode {
    id: PropertyId,
    name: String,
    project: Arc<Project>,
    parent: Option<Weak<RefCell<PropertyTreeNode>>>,
    children: Vec<PropertyRef<PropertyTreeNode>>,
    level_seq_no: usize,
    definitions: IndexMap<String, Arc<AttributeDefinition>>,
    attributes: IndexMap<String, AttributeSlot>,
    scenario_attributes: Vec<IndexMap<String, AttributeSlot>>,
}

impl PropertyTreeNode {
    fn new(
        project: Arc<Project>,
        id: PropertyId,
        name: &str,
        parent: Option<Weak<RefCell<PropertyTreeNode>>>,
        level_seq_no: usize,
    ) -> Self {
        let scenarios = project.scenario_count();
        Self {
            id,
            name: name.to_string(),
            project,
            parent,
            children: Vec::new(),
            level_seq_no,
            definitions: IndexMap::new(),
            attributes: IndexMap::new(),
            scenario_attributes: vec![IndexMap::new(); scenarios],
        }
    }

    /// Creates a top-level node. `level_seq_no` is its 1-based position
    /// among the top-level properties of its collection.
    pub fn root(
        project: &Arc<Project>,
        id: PropertyId,
        name: &str,
        level_seq_no: usize,
    ) -> PropertyRef<Self> {
        Rc::new(RefCell::new(Self::new(
            Arc::clone(project),
            id,
            name,
            None,
            level_seq_no,
        )))
    }

    /// Creates a node as the last child of `parent`.
    pub fn child(parent: &PropertyRef<Self>, id: PropertyId, name: &str) -> PropertyRef<Self> {
        let (project, level_seq_no) = {
            let p = parent.borrow();
            (Arc::clone(&p.project), p.children.len() + 1)
        };
        let node = Rc::new(RefCell::new(Self::new(
            project,
            id,
            name,
            Some(Rc::downgrade(parent)),
            level_seq_no,
        )));
        parent.borrow_mut().children.push(Rc::clone(&node));
        node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project(&self) -> &Arc<Project> {
        &self.project
    }

    pub fn children(&self) -> &[PropertyRef<PropertyTreeNode>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The definition declared under `attribute`, if any.
    pub fn definition(&self, attribute: &str) -> Option<&Arc<AttributeDefinition>> {
        self.definitions.get(attribute)
    }

    /// Scenario-independent value of `attribute`.
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute).map(|slot| &slot.value)
    }

    /// Value of a scenario-specific `attribute` in `scenario`.
    pub fn get_scenario(&self, scenario: usize, attribute: &str) -> Option<&Value> {
        self.scenario_attributes
            .get(scenario)?
            .get(attribute)
            .map(|slot| &slot.value)
    }

    /// Sets a scenario-specific attribute for one scenario and marks it as
    /// provided. Returns `false` if the scenario index is out of range.
    pub fn set_scenario(&mut self, scenario: usize, attribute: &str, value: Value) -> bool {
        match self.scenario_attributes.get_mut(scenario) {
            Some(table) => {
                table.insert(attribute.to_string(), AttributeSlot::provided(value));
                true
            }
            None => false,
        }
    }

    /// Whether `attribute` was set explicitly (in `scenario` for
    /// scenario-specific attributes).
    pub fn provided(&self, scenario: Option<usize>, attribute: &str) -> bool {
        let slot = match scenario {
            Some(s) => self.scenario_attributes.get(s).and_then(|t| t.get(attribute)),
            None => self.attributes.get(attribute),
        };
        slot.is_some_and(|slot| slot.provided)
    }
}

impl PropertyNode for PropertyTreeNode {
    fn id(&self) -> &PropertyId {
        &self.id
    }

    fn parent(&self) -> Option<PropertyRef<Self>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    fn level_seq_no(&self) -> usize {
        self.level_seq_no
    }

    fn declare_attribute(&mut self, definition: &Arc<AttributeDefinition>) {
        if definition.scenario_specific {
            for table in &mut self.scenario_attributes {
                table.insert(definition.id.clone(), AttributeSlot::declared(definition));
            }
        } else {
            self.attributes
                .insert(definition.id.clone(), AttributeSlot::declared(definition));
        }
        self.definitions
            .insert(definition.id.clone(), Arc::clone(definition));
    }

    /// Scenario-specific attributes are set in every scenario. Attributes
    /// that were never declared are stored as scenario-independent values.
    fn set(&mut self, attribute: &str, value: Value) {
        let scenario_specific = self
            .definitions
            .get(attribute)
            .is_some_and(|d| d.scenario_specific);
        if scenario_specific {
            for table in &mut self.scenario_attributes {
                table.insert(attribute.to_string(), AttributeSlot::provided(value.clone()));
            }
        } else {
            self.attributes
                .insert(attribute.to_string(), AttributeSlot::provided(value));
        }
    }

    fn inherit_attributes_from_scenario(&mut self) {
        for (index, scenario) in self.project.scenarios().iter().enumerate() {
            let Some(parent) = scenario.parent else {
                continue;
            };
            let (Some(own), Some(inherited_from)) = (
                self.scenario_attributes.get(index),
                self.scenario_attributes.get(parent),
            ) else {
                continue;
            };
            let inherited: Vec<(String, Value)> = own
                .iter()
                .filter(|(_, slot)| !slot.provided)
                .filter_map(|(id, _)| {
                    inherited_from
                        .get(id)
                        .map(|slot| (id.clone(), slot.value.clone()))
                })
                .collect();
            let Some(own) = self.scenario_attributes.get_mut(index) else {
                continue;
            };
            for (id, value) in inherited {
                if let Some(slot) = own.get_mut(&id) {
                    slot.value = value;
                }
            }
        }
    }
}
