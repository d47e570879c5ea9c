//! Owning context of a property collection.
//!
//! A project carries the scenario tree. Scenarios are stored in definition
//! order and a parent is always defined before its children, so a single
//! forward pass over the list visits every parent before the scenarios
//! derived from it. Deserialized projects are checked for the same order.

use crate::{ModelError, ModelResult};
use propset_types::PropertyId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Id of the scenario every project starts with.
pub const DEFAULT_SCENARIO: &str = "plan";

/// A scenario, optionally derived from a parent scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    /// Index of the parent scenario in [`Project::scenarios`].
    pub parent: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawProject")]
pub struct Project {
    name: String,
    scenarios: Vec<Scenario>,
}

/// Unchecked wire form of [`Project`].
#[derive(Deserialize)]
struct RawProject {
    name: String,
    scenarios: Vec<Scenario>,
}

impl TryFrom<RawProject> for Project {
    type Error = ModelError;

    fn try_from(raw: RawProject) -> ModelResult<Self> {
        for (index, scenario) in raw.scenarios.iter().enumerate() {
            if raw.scenarios[..index].iter().any(|s| s.id == scenario.id) {
                return Err(ModelError::DuplicateScenario(scenario.id.clone()));
            }
            if let Some(parent) = scenario.parent
                && parent >= index
            {
                return Err(ModelError::ScenarioOrder {
                    scenario: scenario.id.clone(),
                    parent,
                });
            }
        }
        Ok(Self {
            name: raw.name,
            scenarios: raw.scenarios,
        })
    }
}

impl Project {
    /// Creates a project with the single top-level `plan` scenario.
    pub fn new(name: &str) -> Self {
        let plan = Scenario {
            id: DEFAULT_SCENARIO.to_string(),
            name: "Plan Scenario".to_string(),
            parent: None,
        };
        Self {
            name: name.to_string(),
            scenarios: vec![plan],
        }
    }

    /// Adds a scenario derived from `parent` (or a new top-level one) and
    /// returns its index.
    pub fn add_scenario(
        &mut self,
        id: &PropertyId,
        name: &str,
        parent: Option<&str>,
    ) -> ModelResult<usize> {
        if self.scenario_index(id.as_str()).is_some() {
            return Err(ModelError::DuplicateScenario(id.to_string()));
        }
        let parent = match parent {
            Some(p) => Some(
                self.scenario_index(p)
                    .ok_or_else(|| ModelError::UnknownScenario(p.to_string()))?,
            ),
            None => None,
        };
        debug!("Adding scenario {} (parent {:?})", id, parent);
        self.scenarios.push(Scenario {
            id: id.to_string(),
            name: name.to_string(),
            parent,
        });
        Ok(self.scenarios.len() - 1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    pub fn scenario(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    pub fn scenario_index(&self, id: &str) -> Option<usize> {
        self.scenarios.iter().position(|s| s.id == id)
    }
}
