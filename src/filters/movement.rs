use chrono::NaiveDate;

use crate::domain::{Category, FinancialMovement, RecordStatus, ReferenceType, Sign, Source};

use super::{Checks, FilterLogic};

/// Filter specification for the movements table.
#[derive(Debug, Clone, Default)]
pub struct MovementFilter {
    pub category: Option<Vec<Category>>,
    pub kind: Option<Vec<String>>,
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
    pub sign: Option<Vec<Sign>>,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    pub source: Option<Vec<Source>>,
    pub reference_type: Option<Vec<ReferenceType>>,
    pub reference: Option<String>,
    pub reference_state: Option<Vec<String>>,
    pub status: Option<Vec<RecordStatus>>,
    pub logic: FilterLogic,
}

impl MovementFilter {
    pub fn matches(&self, movement: &FinancialMovement) -> bool {
        let mut checks = Checks::new();
        checks.set_membership(self.category.as_deref(), &movement.category);
        checks.set_membership(self.kind.as_deref(), &movement.kind);
        checks.date_from(self.date_min, movement.date);
        checks.date_to(self.date_max, movement.date);
        checks.set_membership(self.sign.as_deref(), &movement.sign);
        checks.min_amount(self.amount_min, movement.amount);
        checks.max_amount(self.amount_max, movement.amount);
        checks.set_membership(self.source.as_deref(), &movement.source);
        checks.optional_set_membership(
            self.reference_type.as_deref(),
            movement.reference_type.as_ref(),
        );
        checks.contains_text(self.reference.as_deref(), movement.reference.as_deref());
        checks.optional_set_membership(
            self.reference_state.as_deref(),
            movement.reference_state.as_ref(),
        );
        checks.set_membership(self.status.as_deref(), &movement.status);
        checks.resolve(self.logic)
    }

    /// Narrows a collection to the matching records, preserving order.
    pub fn apply<'a>(&self, movements: &'a [FinancialMovement]) -> Vec<&'a FinancialMovement> {
        movements.iter().filter(|m| self.matches(m)).collect()
    }
}
