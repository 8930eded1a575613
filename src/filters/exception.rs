use crate::domain::{
    Category, Criticality, Exception, ExceptionState, ExceptionType, ReferenceType, Sign,
};

use super::{Checks, FilterLogic};

/// Filter specification for the exceptions table.
#[derive(Debug, Clone, Default)]
pub struct ExceptionFilter {
    pub category: Option<Vec<Category>>,
    pub kind: Option<Vec<String>>,
    pub exception_type: Option<Vec<ExceptionType>>,
    pub criticality: Option<Vec<Criticality>>,
    pub reference_type: Option<Vec<ReferenceType>>,
    pub reference: Option<String>,
    pub reference_state: Option<Vec<String>>,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    pub sign: Option<Vec<Sign>>,
    pub description_search: Option<String>,
    pub state: Option<Vec<ExceptionState>>,
    pub logic: FilterLogic,
}

impl ExceptionFilter {
    pub fn matches(&self, exception: &Exception) -> bool {
        let mut checks = Checks::new();
        checks.set_membership(self.category.as_deref(), &exception.category);
        checks.set_membership(self.kind.as_deref(), &exception.kind);
        checks.set_membership(self.exception_type.as_deref(), &exception.exception_type);
        checks.set_membership(self.criticality.as_deref(), &exception.criticality);
        checks.optional_set_membership(
            self.reference_type.as_deref(),
            exception.reference_type.as_ref(),
        );
        checks.contains_text(self.reference.as_deref(), exception.reference.as_deref());
        checks.optional_set_membership(
            self.reference_state.as_deref(),
            exception.reference_state.as_ref(),
        );
        checks.min_amount(self.amount_min, exception.amount);
        checks.max_amount(self.amount_max, exception.amount);
        checks.set_membership(self.sign.as_deref(), &exception.sign);
        checks.contains_text(
            self.description_search.as_deref(),
            Some(exception.description.as_str()),
        );
        checks.set_membership(self.state.as_deref(), &exception.state);
        checks.resolve(self.logic)
    }

    /// Narrows a collection to the matching records, preserving order.
    pub fn apply<'a>(&self, exceptions: &'a [Exception]) -> Vec<&'a Exception> {
        exceptions.iter().filter(|e| self.matches(e)).collect()
    }
}
