use propset_types::{Error, FullId, PropertyId};
use proptest::prelude::*;
use std::collections::HashSet;
use std::str::FromStr;

// ── PropertyId ────────────────────────────────────────────────────

#[test]
fn property_id_accepts_identifiers() {
    for s in ["task", "_hidden", "t1", "phase-2", "A_b_C"] {
        let id = PropertyId::parse(s).unwrap();
        assert_eq!(id.as_str(), s);
    }
}

#[test]
fn property_id_rejects_empty() {
    assert_eq!(PropertyId::parse(""), Err(Error::EmptyId));
}

#[test]
fn property_id_rejects_leading_digit() {
    assert_eq!(
        PropertyId::parse("1task"),
        Err(Error::InvalidStart("1task".to_string()))
    );
}

#[test]
fn property_id_rejects_separator() {
    assert_eq!(
        PropertyId::parse("a.b"),
        Err(Error::InvalidCharacter {
            id: "a.b".to_string(),
            found: '.'
        })
    );
}

#[test]
fn property_id_display_and_from_str() {
    let id = PropertyId::from_str("design").unwrap();
    assert_eq!(id.to_string(), "design");
}

#[test]
fn property_id_hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(PropertyId::parse("a").unwrap());
    set.insert(PropertyId::parse("a").unwrap()); // duplicate
    assert_eq!(set.len(), 1);
}

#[test]
fn property_id_serde_is_transparent_string() {
    let id = PropertyId::parse("task").unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"task\"");
    let back: PropertyId = serde_json::from_str("\"task\"").unwrap();
    assert_eq!(back, id);
}

#[test]
fn property_id_serde_validates() {
    assert!(serde_json::from_str::<PropertyId>("\"no spaces\"").is_err());
}

// ── FullId ────────────────────────────────────────────────────────

#[test]
fn full_id_builds_dotted_path() {
    let root = FullId::root(&PropertyId::parse("prj").unwrap());
    let child = root.child(&PropertyId::parse("phase1").unwrap());
    let grandchild = child.child(&PropertyId::parse("design").unwrap());

    assert_eq!(grandchild.as_str(), "prj.phase1.design");
    assert_eq!(grandchild.leaf(), "design");
    assert_eq!(grandchild.level(), 2);
    assert_eq!(grandchild.parent(), Some(child));
    assert_eq!(root.level(), 0);
    assert_eq!(root.parent(), None);
}

#[test]
fn full_id_segments() {
    let id = FullId::parse("a.b.c").unwrap();
    assert_eq!(id.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn full_id_parse_rejects_bad_segment() {
    assert!(FullId::parse("a..b").is_err());
    assert!(FullId::parse("a.1b").is_err());
    assert!(FullId::parse("").is_err());
}

#[test]
fn full_id_from_str_roundtrip() {
    let id = FullId::from_str("x.y").unwrap();
    assert_eq!(id.to_string(), "x.y");
}

proptest! {
    /// Level always equals the number of segments minus one.
    #[test]
    fn full_id_level_matches_segments(segments in prop::collection::vec("[a-z][a-z0-9_]{0,6}", 1..6)) {
        let mut id = FullId::root(&PropertyId::parse(&segments[0]).unwrap());
        for s in &segments[1..] {
            id = id.child(&PropertyId::parse(s).unwrap());
        }
        prop_assert_eq!(id.level(), segments.len() - 1);
        prop_assert_eq!(id.leaf(), segments.last().unwrap().as_str());
    }
}
