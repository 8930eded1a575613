//! Declarative per-field filters for the table views.
//!
//! Each view builds a filter specification from its form state; every set
//! field contributes one boolean check per record, and the logic flag decides
//! how the checks combine. A specification with no fields set matches
//! everything.

pub mod exception;
pub mod manual_entry;
pub mod movement;

pub use exception::ExceptionFilter;
pub use manual_entry::ManualEntryFilter;
pub use movement::MovementFilter;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the per-field checks of a specification combine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FilterLogic {
    #[default]
    #[serde(rename = "ET")]
    And,
    #[serde(rename = "OU")]
    Or,
}

impl FilterLogic {
    pub fn label(&self) -> &'static str {
        match self {
            FilterLogic::And => "ET",
            FilterLogic::Or => "OU",
        }
    }
}

/// Collects the boolean outcome of every predicate a record was tested
/// against. Predicates whose filter field is unset contribute nothing.
#[derive(Default)]
pub(crate) struct Checks {
    results: Vec<bool>,
}

impl Checks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Membership of a required attribute in the allowed set. An empty set
    /// means the field is unconstrained.
    pub(crate) fn set_membership<T: PartialEq>(&mut self, allowed: Option<&[T]>, value: &T) {
        if let Some(set) = allowed {
            if !set.is_empty() {
                self.results.push(set.contains(value));
            }
        }
    }

    /// Membership test for an optional attribute: a record missing the
    /// attribute cannot match a non-empty allowed set.
    pub(crate) fn optional_set_membership<T: PartialEq>(
        &mut self,
        allowed: Option<&[T]>,
        value: Option<&T>,
    ) {
        if let Some(set) = allowed {
            if !set.is_empty() {
                self.results
                    .push(value.map_or(false, |value| set.contains(value)));
            }
        }
    }

    /// Lower bound against the amount's magnitude, independent of sign.
    pub(crate) fn min_amount(&mut self, bound: Option<f64>, amount: f64) {
        if let Some(min) = bound {
            self.results.push(amount.abs() >= min);
        }
    }

    /// Upper bound against the amount's magnitude, independent of sign.
    pub(crate) fn max_amount(&mut self, bound: Option<f64>, amount: f64) {
        if let Some(max) = bound {
            self.results.push(amount.abs() <= max);
        }
    }

    pub(crate) fn date_from(&mut self, bound: Option<NaiveDate>, value: NaiveDate) {
        if let Some(min) = bound {
            self.results.push(value >= min);
        }
    }

    pub(crate) fn date_to(&mut self, bound: Option<NaiveDate>, value: NaiveDate) {
        if let Some(max) = bound {
            self.results.push(value <= max);
        }
    }

    /// Case-insensitive substring search. A blank needle is treated as
    /// unset; a record with no text never matches a set needle.
    pub(crate) fn contains_text(&mut self, needle: Option<&str>, haystack: Option<&str>) {
        if let Some(needle) = needle {
            if !needle.is_empty() {
                let lowered = needle.to_lowercase();
                self.results.push(
                    haystack.map_or(false, |text| text.to_lowercase().contains(&lowered)),
                );
            }
        }
    }

    /// Combines the collected checks. No checks at all means the record
    /// passes unconditionally.
    pub(crate) fn resolve(self, logic: FilterLogic) -> bool {
        if self.results.is_empty() {
            return true;
        }
        match logic {
            FilterLogic::And => self.results.iter().all(|check| *check),
            FilterLogic::Or => self.results.iter().any(|check| *check),
        }
    }
}
