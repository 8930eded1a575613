use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{error, warn};
use uuid::Uuid;

use super::movement::{GeneratedMovement, MovementDraft, MovementPatch, SimulationMovement};
use super::scenario::Scenario;
use super::snapshot::ScenarioSnapshot;

/// In-memory scenario store scoped to the signed-in user.
///
/// One engine instance belongs to one UI session, injected from the top of
/// the application rather than held as a global. Ownership checks here guard
/// against stale references between views; real authorization lives in the
/// backing API. Accordingly, nothing in this store returns an error: a call
/// that cannot proceed degrades to a no-op with a diagnostic log line.
#[derive(Debug, Default)]
pub struct SimulationEngine {
    scenarios: BTreeMap<Uuid, Scenario>,
    active: Option<Uuid>,
    current_user: Option<String>,
}

impl SimulationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ownership scope. `None` (signed out) denies all scenario
    /// access until a user is set again.
    pub fn set_current_user(&mut self, user_id: Option<String>) {
        self.current_user = user_id;
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Drops every scenario and the active selection.
    pub fn clear(&mut self) {
        self.scenarios.clear();
        self.active = None;
    }

    /// Scenarios owned by the current user, oldest first.
    pub fn user_scenarios(&self) -> Vec<&Scenario> {
        let Some(user) = self.current_user.as_deref() else {
            return Vec::new();
        };
        let mut scenarios: Vec<&Scenario> = self
            .scenarios
            .values()
            .filter(|scenario| scenario.created_by == user)
            .collect();
        scenarios.sort_by_key(|scenario| scenario.created_at);
        scenarios
    }

    /// Creates a scenario owned by the current user and makes it active.
    /// Requires a signed-in user; the authoring form guarantees a non-empty
    /// name.
    pub fn create_scenario(&mut self, name: impl Into<String>, description: impl Into<String>) {
        let Some(user) = self.current_user.clone() else {
            error!("cannot create scenario: no user signed in");
            return;
        };
        let scenario = Scenario::new(name, description, user);
        self.active = Some(scenario.id);
        self.scenarios.insert(scenario.id, scenario);
    }

    pub fn delete_scenario(&mut self, id: Uuid) {
        if self.scenarios.remove(&id).is_some() && self.active == Some(id) {
            self.active = None;
        }
    }

    /// Selects a scenario for editing and analytics. Denied (and logged)
    /// unless the scenario exists and belongs to the current user.
    pub fn set_active_scenario(&mut self, id: Uuid) {
        let owned = self
            .scenarios
            .get(&id)
            .is_some_and(|scenario| Some(scenario.created_by.as_str()) == self.current_user());
        if owned {
            self.active = Some(id);
        } else {
            warn!(%id, "cannot access scenario: not owned by current user");
        }
    }

    pub fn active_scenario(&self) -> Option<&Scenario> {
        self.active.and_then(|id| self.scenarios.get(&id))
    }

    pub fn active_movements(&self) -> &[SimulationMovement] {
        self.active_scenario()
            .map(|scenario| scenario.movements.as_slice())
            .unwrap_or(&[])
    }

    /// Adds a movement to the active scenario, assigning its identity and
    /// expanding its schedule into generated dates.
    pub fn add_movement(&mut self, draft: MovementDraft) {
        let Some(scenario) = self.active_scenario_mut() else {
            return;
        };
        scenario.movements.push(draft.into_movement());
        scenario.touch();
    }

    /// Merges a partial update into an existing movement and re-expands its
    /// generated dates from the merged result.
    pub fn update_movement(&mut self, id: Uuid, patch: MovementPatch) {
        let Some(scenario) = self.active_scenario_mut() else {
            return;
        };
        let Some(movement) = scenario.movement_mut(id) else {
            return;
        };
        patch.apply_to(movement);
        movement.generated_dates = movement.schedule.occurrences();
        scenario.touch();
    }

    pub fn delete_movement(&mut self, id: Uuid) {
        let Some(scenario) = self.active_scenario_mut() else {
            return;
        };
        let before = scenario.movements.len();
        scenario.movements.retain(|movement| movement.id != id);
        if scenario.movements.len() != before {
            scenario.touch();
        }
    }

    /// Export source: the transportable document for a scenario, if present.
    pub fn snapshot(&self, id: Uuid) -> Option<ScenarioSnapshot> {
        self.scenarios.get(&id).map(ScenarioSnapshot::from)
    }

    /// Re-instantiates an exported document as a fresh scenario: new id, new
    /// timestamps, owned by the current user. Movements are copied verbatim,
    /// embedded generated dates included. The import becomes active.
    pub fn import_snapshot(&mut self, snapshot: ScenarioSnapshot) {
        let Some(user) = self.current_user.clone() else {
            error!("cannot import scenario: no user signed in");
            return;
        };
        let now = Utc::now();
        let scenario = Scenario {
            id: Uuid::new_v4(),
            name: snapshot.name,
            description: snapshot.description,
            movements: snapshot.movements,
            created_at: now,
            updated_at: now,
            created_by: user,
        };
        self.active = Some(scenario.id);
        self.scenarios.insert(scenario.id, scenario);
    }

    /// Flattens the active scenario into individual dated cash events,
    /// ascending by date. Movements sharing a date keep their insertion
    /// order.
    pub fn generated_movements(&self) -> Vec<GeneratedMovement> {
        let Some(scenario) = self.active_scenario() else {
            return Vec::new();
        };
        let mut events: Vec<GeneratedMovement> = scenario
            .movements
            .iter()
            .flat_map(|movement| {
                movement.generated_dates.iter().map(|date| GeneratedMovement {
                    date: *date,
                    amount: movement.amount,
                    sign: movement.sign,
                    category: movement.category,
                    kind: movement.kind.clone(),
                })
            })
            .collect();
        events.sort_by_key(|event| event.date);
        events
    }

    fn active_scenario_mut(&mut self) -> Option<&mut Scenario> {
        let id = self.active?;
        self.scenarios.get_mut(&id)
    }
}
