//! Work Breakdown Structure indexing.
//!
//! Indexing is a two-phase pass over a collection:
//!
//! 1. measure: find the maximum tree depth `D` over *all* properties,
//! 2. format: render every property's sibling-index path as a dotted WBS
//!    code (`2.1.3`) and as a tree path where each index is zero-padded to
//!    the number of digits of `D` and concatenated.
//!
//! The padding width depends on the whole collection, so formatting can
//! only start once the measurement is complete.

use crate::PropertyCollection;
use propset_model::{PropertyNode, PropertyRef};
use serde_json::Value;
use tracing::debug;

/// Attribute that receives the dotted WBS code.
pub const WBS_ATTRIBUTE: &str = "wbs";

/// Attribute that receives the fixed-width tree path.
pub const TREE_ATTRIBUTE: &str = "tree";

/// Both renderings of one sibling-index path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WbsCode {
    /// Indices joined by `.`, e.g. `1.2.1`.
    pub wbs: String,
    /// Indices zero-padded to a common width and concatenated.
    pub tree: String,
}

/// Number of tree levels spanned by `properties`: the deepest level plus
/// one. Never less than 1, even for no properties.
pub fn max_depth<'a, N>(properties: impl IntoIterator<Item = &'a PropertyRef<N>>) -> usize
where
    N: PropertyNode + 'a,
{
    properties
        .into_iter()
        .map(|p| p.borrow().level())
        .max()
        .map_or(1, |level| level + 1)
}

/// Digits needed to print `depth` in decimal (`floor(log10(depth)) + 1`).
/// A depth of 0 is treated as 1.
///
/// Indices wider than this are printed in full, so `tree` paths are not
/// unique: with width 1, `[1, 12]` and `[11, 2]` both render as `112`. Use
/// `wbs` when a property must be identified by its code.
pub fn digit_width(depth: usize) -> usize {
    depth.max(1).ilog10() as usize + 1
}

/// Renders a sibling-index path using the given padding width.
pub fn format_path(indices: &[usize], width: usize) -> WbsCode {
    let tree = indices
        .iter()
        .map(|idx| format!("{idx:0width$}"))
        .collect::<String>();
    let wbs = indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".");
    WbsCode { wbs, tree }
}

/// Writes the `wbs` and `tree` attributes of every property in `collection`.
///
/// This mutates each property in place through [`PropertyNode::set`].
/// Returns the number of properties indexed.
pub fn index<N: PropertyNode>(collection: &PropertyCollection<N>) -> usize {
    let depth = max_depth(collection);
    let width = digit_width(depth);

    let mut indexed = 0;
    for property in collection {
        let indices = property.borrow().wbs_indices();
        let code = format_path(&indices, width);
        let mut p = property.borrow_mut();
        p.set(WBS_ATTRIBUTE, Value::String(code.wbs));
        p.set(TREE_ATTRIBUTE, Value::String(code.tree));
        indexed += 1;
    }

    debug!(
        "Indexed {} properties (max depth {}, width {})",
        indexed, depth, width
    );
    indexed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_width_boundaries() {
        assert_eq!(digit_width(0), 1);
        assert_eq!(digit_width(1), 1);
        assert_eq!(digit_width(9), 1);
        assert_eq!(digit_width(10), 2);
        assert_eq!(digit_width(99), 2);
        assert_eq!(digit_width(100), 3);
    }

    #[test]
    fn format_single_index() {
        let code = format_path(&[3], 1);
        assert_eq!(code.wbs, "3");
        assert_eq!(code.tree, "3");
    }

    #[test]
    fn format_pads_every_index() {
        let code = format_path(&[2, 1, 3], 2);
        assert_eq!(code.wbs, "2.1.3");
        assert_eq!(code.tree, "020103");
    }

    #[test]
    fn format_does_not_truncate_wide_indices() {
        let code = format_path(&[1, 12], 1);
        assert_eq!(code.wbs, "1.12");
        assert_eq!(code.tree, "112");
    }

    #[test]
    fn wide_indices_can_collide_in_tree_but_not_wbs() {
        let a = format_path(&[1, 12], 1);
        let b = format_path(&[11, 2], 1);
        assert_eq!(a.tree, b.tree);
        assert_ne!(a.wbs, b.wbs);
    }

    #[test]
    fn format_empty_path() {
        let code = format_path(&[], 1);
        assert_eq!(code.wbs, "");
        assert_eq!(code.tree, "");
    }
}
