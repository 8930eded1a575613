use chrono::NaiveDate;

use crate::domain::{Category, Frequency, ManualEntry, ReferenceType, Sign};

use super::{Checks, FilterLogic};

/// Filter specification for the manual-entries table.
#[derive(Debug, Clone, Default)]
pub struct ManualEntryFilter {
    /// Authors (`created_by` user ids).
    pub user: Option<Vec<String>>,
    pub update_date_min: Option<NaiveDate>,
    pub update_date_max: Option<NaiveDate>,
    pub category: Option<Vec<Category>>,
    pub kind: Option<Vec<String>>,
    pub sign: Option<Vec<Sign>>,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    pub frequency: Option<Vec<Frequency>>,
    pub reference_type: Option<Vec<ReferenceType>>,
    pub reference: Option<String>,
    pub reference_state: Option<Vec<String>>,
    pub note_search: Option<String>,
    pub logic: FilterLogic,
}

impl ManualEntryFilter {
    pub fn matches(&self, entry: &ManualEntry) -> bool {
        let mut checks = Checks::new();
        checks.set_membership(self.user.as_deref(), &entry.created_by);
        // Update-date bounds only apply to entries that have been updated.
        if let Some(updated_at) = entry.updated_at {
            checks.date_from(self.update_date_min, updated_at.date_naive());
            checks.date_to(self.update_date_max, updated_at.date_naive());
        }
        checks.set_membership(self.category.as_deref(), &entry.category);
        checks.set_membership(self.kind.as_deref(), &entry.kind);
        checks.set_membership(self.sign.as_deref(), &entry.sign);
        checks.min_amount(self.amount_min, entry.amount);
        checks.max_amount(self.amount_max, entry.amount);
        checks.set_membership(self.frequency.as_deref(), &entry.frequency);
        checks.optional_set_membership(
            self.reference_type.as_deref(),
            entry.reference_type.as_ref(),
        );
        checks.contains_text(self.reference.as_deref(), entry.reference.as_deref());
        checks.optional_set_membership(
            self.reference_state.as_deref(),
            entry.reference_state.as_ref(),
        );
        checks.contains_text(self.note_search.as_deref(), entry.note.as_deref());
        checks.resolve(self.logic)
    }

    /// Narrows a collection to the matching records, preserving order.
    pub fn apply<'a>(&self, entries: &'a [ManualEntry]) -> Vec<&'a ManualEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}
