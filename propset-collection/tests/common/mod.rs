//! Shared test helpers for collection tests.

#![allow(dead_code)]

use propset_collection::{CollectionConfig, PropertyCollection};
use propset_model::{Project, PropertyRef, PropertyTreeNode};
use propset_types::PropertyId;
use std::sync::Arc;

pub type Node = PropertyRef<PropertyTreeNode>;

pub fn pid(s: &str) -> PropertyId {
    PropertyId::parse(s).unwrap()
}

pub fn project() -> Arc<Project> {
    Arc::new(Project::new("Test Project"))
}

/// Empty collection owned by a fresh project.
pub fn collection(config: CollectionConfig) -> PropertyCollection {
    PropertyCollection::new(Some(project()), config).unwrap()
}

/// Creates a top-level node numbered after the collection's current roots.
pub fn root(collection: &PropertyCollection, id: &str) -> Node {
    let project = Arc::clone(collection.project().unwrap());
    PropertyTreeNode::root(&project, pid(id), id, collection.next_top_level_seq_no())
}

pub fn child(parent: &Node, id: &str) -> Node {
    PropertyTreeNode::child(parent, pid(id), id)
}

/// Builds and admits
///
/// ```text
/// r ─┬─ a ── c
///    └─ b
/// ```
///
/// and returns `[r, a, b, c]`.
pub fn sample_tree(collection: &mut PropertyCollection) -> [Node; 4] {
    let r = root(collection, "r");
    collection.add_property(r.clone()).unwrap();
    let a = child(&r, "a");
    collection.add_property(a.clone()).unwrap();
    let b = child(&r, "b");
    collection.add_property(b.clone()).unwrap();
    let c = child(&a, "c");
    collection.add_property(c.clone()).unwrap();
    [r, a, b, c]
}

/// String value of a scenario-independent attribute.
pub fn attr(node: &Node, attribute: &str) -> Option<String> {
    node.borrow()
        .get(attribute)
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
