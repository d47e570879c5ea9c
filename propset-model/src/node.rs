use crate::AttributeDefinition;
use propset_types::{FullId, PropertyId};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Shared handle to a property node.
///
/// Nodes are owned by their tree; collections only keep handles.
pub type PropertyRef<N> = Rc<RefCell<N>>;

/// Contract a tree node must satisfy to be admitted to a property collection.
///
/// Only `id`, `parent`, `level_seq_no` and the three mutators must be
/// implemented. The tree-derived queries have default implementations that
/// walk the parent chain.
pub trait PropertyNode: Sized {
    /// The node's own identifier, unique among its siblings.
    fn id(&self) -> &PropertyId;

    /// The parent node, or `None` for a root.
    fn parent(&self) -> Option<PropertyRef<Self>>;

    /// 1-based position among the node's siblings (or among top-level
    /// properties for a root).
    fn level_seq_no(&self) -> usize;

    /// Prepare storage for `definition`, initialized to its default value.
    fn declare_attribute(&mut self, definition: &Arc<AttributeDefinition>);

    /// Store `value` under `attribute`.
    fn set(&mut self, attribute: &str, value: Value);

    /// Fill every scenario-specific attribute that was not explicitly
    /// provided from the parent scenario.
    fn inherit_attributes_from_scenario(&mut self);

    /// Ancestry-qualified identifier, e.g. `prj.phase1.design`.
    fn full_id(&self) -> FullId {
        let Some(parent) = self.parent() else {
            return FullId::root(self.id());
        };
        let parent_id = parent.borrow().full_id();
        parent_id.child(self.id())
    }

    /// Zero-based tree depth (roots are at level 0).
    fn level(&self) -> usize {
        let Some(parent) = self.parent() else {
            return 0;
        };
        let parent_level = parent.borrow().level();
        parent_level + 1
    }

    /// Sibling positions from the root down to this node.
    fn wbs_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        if let Some(parent) = self.parent() {
            indices = parent.borrow().wbs_indices();
        }
        indices.push(self.level_seq_no());
        indices
    }
}
