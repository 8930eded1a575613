use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, ReferenceType, Sign, Visibility};

use super::schedule::Schedule;

/// One hypothetical cash event held by a scenario. Amounts are magnitudes;
/// the sign carries the direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMovement {
    pub id: Uuid,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub sign: Sign,
    #[serde(flatten)]
    pub schedule: Schedule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<ReferenceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Concrete calendar dates the schedule expands to. Recomputed on every
    /// create/update; carried verbatim through snapshot export and import.
    #[serde(default)]
    pub generated_dates: Vec<NaiveDate>,
}

/// Authoring-form payload for a new movement: everything but the identity
/// and the derived dates.
#[derive(Debug, Clone)]
pub struct MovementDraft {
    pub category: Category,
    pub kind: String,
    pub amount: f64,
    pub sign: Sign,
    pub schedule: Schedule,
    pub reference: Option<String>,
    pub reference_type: Option<ReferenceType>,
    pub note: Option<String>,
    pub visibility: Option<Visibility>,
}

impl MovementDraft {
    pub(crate) fn into_movement(self) -> SimulationMovement {
        let generated_dates = self.schedule.occurrences();
        SimulationMovement {
            id: Uuid::new_v4(),
            category: self.category,
            kind: self.kind,
            amount: self.amount,
            sign: self.sign,
            schedule: self.schedule,
            reference: self.reference,
            reference_type: self.reference_type,
            note: self.note,
            visibility: self.visibility,
            generated_dates,
        }
    }
}

/// Field-by-field partial update applied to an existing movement. `None`
/// leaves the field untouched; optional fields take a nested `Option` so a
/// patch can also clear them.
#[derive(Debug, Clone, Default)]
pub struct MovementPatch {
    pub category: Option<Category>,
    pub kind: Option<String>,
    pub amount: Option<f64>,
    pub sign: Option<Sign>,
    pub schedule: Option<Schedule>,
    pub reference: Option<Option<String>>,
    pub reference_type: Option<Option<ReferenceType>>,
    pub note: Option<Option<String>>,
    pub visibility: Option<Option<Visibility>>,
}

impl MovementPatch {
    pub(crate) fn apply_to(self, movement: &mut SimulationMovement) {
        if let Some(category) = self.category {
            movement.category = category;
        }
        if let Some(kind) = self.kind {
            movement.kind = kind;
        }
        if let Some(amount) = self.amount {
            movement.amount = amount;
        }
        if let Some(sign) = self.sign {
            movement.sign = sign;
        }
        if let Some(schedule) = self.schedule {
            movement.schedule = schedule;
        }
        if let Some(reference) = self.reference {
            movement.reference = reference;
        }
        if let Some(reference_type) = self.reference_type {
            movement.reference_type = reference_type;
        }
        if let Some(note) = self.note {
            movement.note = note;
        }
        if let Some(visibility) = self.visibility {
            movement.visibility = visibility;
        }
    }
}

/// One concrete dated cash event, flattened out of a movement's generated
/// dates for the analytics overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMovement {
    pub date: NaiveDate,
    pub amount: f64,
    pub sign: Sign,
    pub category: Category,
    pub kind: String,
}
