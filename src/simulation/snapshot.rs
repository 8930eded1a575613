use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::movement::SimulationMovement;
use super::scenario::Scenario;

/// Transportable scenario document (`.tabtre` file). The movement list is
/// carried in full, generated dates included, so an import does not have to
/// re-expand anything. `created_by` travels for display only; import always
/// reassigns ownership to the importing user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSnapshot {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub movements: Vec<SimulationMovement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl From<&Scenario> for ScenarioSnapshot {
    fn from(scenario: &Scenario) -> Self {
        Self {
            name: scenario.name.clone(),
            description: scenario.description.clone(),
            movements: scenario.movements.clone(),
            created_at: scenario.created_at,
            updated_at: scenario.updated_at,
            created_by: scenario.created_by.clone(),
        }
    }
}
