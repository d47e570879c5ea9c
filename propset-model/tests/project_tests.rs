use propset_model::{ModelError, Project};
use propset_types::PropertyId;
use serde_json::json;

fn pid(s: &str) -> PropertyId {
    PropertyId::parse(s).unwrap()
}

#[test]
fn new_project_has_plan_scenario() {
    let project = Project::new("Acme");
    assert_eq!(project.name(), "Acme");
    assert_eq!(project.scenario_count(), 1);
    assert_eq!(project.scenario(0).unwrap().id, "plan");
    assert_eq!(project.scenario(0).unwrap().parent, None);
}

#[test]
fn add_scenario_links_parent() {
    let mut project = Project::new("Acme");
    let idx = project.add_scenario(&pid("delayed"), "Delayed", Some("plan")).unwrap();
    assert_eq!(idx, 1);
    assert_eq!(project.scenario(1).unwrap().parent, Some(0));
    assert_eq!(project.scenario_index("delayed"), Some(1));
}

#[test]
fn add_scenario_rejects_duplicates() {
    let mut project = Project::new("Acme");
    assert_eq!(
        project.add_scenario(&pid("plan"), "Again", None),
        Err(ModelError::DuplicateScenario("plan".to_string()))
    );
}

#[test]
fn add_scenario_rejects_unknown_parent() {
    let mut project = Project::new("Acme");
    assert_eq!(
        project.add_scenario(&pid("x"), "X", Some("nope")),
        Err(ModelError::UnknownScenario("nope".to_string()))
    );
    assert_eq!(project.scenario_count(), 1);
}

// ── Deserialization ──────────────────────────────────────────────

#[test]
fn deserialize_round_trips_scenario_tree() {
    let mut project = Project::new("Acme");
    project.add_scenario(&pid("delayed"), "Delayed", Some("plan")).unwrap();
    project.add_scenario(&pid("worst"), "Worst", Some("delayed")).unwrap();

    let value = serde_json::to_value(&project).unwrap();
    let back: Project = serde_json::from_value(value).unwrap();
    assert_eq!(back.scenarios(), project.scenarios());
}

#[test]
fn deserialize_rejects_out_of_range_parent() {
    let raw = json!({
        "name": "Acme",
        "scenarios": [
            { "id": "plan", "name": "Plan", "parent": null },
            { "id": "x", "name": "X", "parent": 7 },
        ],
    });
    let err = serde_json::from_value::<Project>(raw).unwrap_err();
    assert!(err.to_string().contains("scenario 'x'"));
}

#[test]
fn deserialize_rejects_parent_defined_later() {
    let raw = json!({
        "name": "Acme",
        "scenarios": [
            { "id": "child", "name": "Child", "parent": 1 },
            { "id": "plan", "name": "Plan", "parent": null },
        ],
    });
    assert!(serde_json::from_value::<Project>(raw).is_err());
}

#[test]
fn deserialize_rejects_self_parent() {
    let raw = json!({
        "name": "Acme",
        "scenarios": [{ "id": "plan", "name": "Plan", "parent": 0 }],
    });
    assert!(serde_json::from_value::<Project>(raw).is_err());
}

#[test]
fn deserialize_rejects_duplicate_scenario_ids() {
    let raw = json!({
        "name": "Acme",
        "scenarios": [
            { "id": "plan", "name": "Plan", "parent": null },
            { "id": "plan", "name": "Again", "parent": 0 },
        ],
    });
    let err = serde_json::from_value::<Project>(raw).unwrap_err();
    assert!(err.to_string().contains("already defined"));
}

#[test]
fn scenario_order_error_names_scenario_and_parent() {
    let err = ModelError::ScenarioOrder {
        scenario: "x".to_string(),
        parent: 7,
    };
    assert_eq!(
        err.to_string(),
        "scenario 'x' refers to parent #7, which is not defined before it"
    );
}
