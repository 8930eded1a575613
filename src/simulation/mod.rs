//! Scenario store, recurrence expansion, and the snapshot document.

pub mod engine;
pub mod movement;
pub mod scenario;
pub mod schedule;
pub mod snapshot;

pub use engine::SimulationEngine;
pub use movement::{GeneratedMovement, MovementDraft, MovementPatch, SimulationMovement};
pub use scenario::Scenario;
pub use schedule::{Schedule, ScheduleError};
pub use snapshot::ScenarioSnapshot;
