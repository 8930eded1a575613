use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::movement::SimulationMovement;

/// A named, user-owned collection of hypothetical movements used for what-if
/// analysis. Only the owning user can select or list it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub movements: Vec<SimulationMovement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            movements: Vec::new(),
            created_at: now,
            updated_at: now,
            created_by: created_by.into(),
        }
    }

    pub fn movement(&self, id: Uuid) -> Option<&SimulationMovement> {
        self.movements.iter().find(|movement| movement.id == id)
    }

    pub(crate) fn movement_mut(&mut self, id: Uuid) -> Option<&mut SimulationMovement> {
        self.movements.iter_mut().find(|movement| movement.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
