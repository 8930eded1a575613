use serde::{Deserialize, Serialize};

use super::types::{Category, ReferenceType, Sign};

/// Data-quality categories raised by the ERP sync.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExceptionType {
    #[serde(rename = "Mouvements ajoutés automatiquement")]
    AutoAdded,
    #[serde(rename = "Mouvements non traités à ajouter manuellement")]
    Unprocessed,
    #[serde(rename = "Mouvements partiellement ajoutés : à compléter")]
    PartiallyAdded,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Criticality {
    #[serde(rename = "Critique")]
    Critical,
    #[serde(rename = "Majeure")]
    Major,
    Warning,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExceptionState {
    Visible,
    #[serde(rename = "Cachée")]
    Hidden,
}

/// A flagged data-quality issue surfaced on the exceptions view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exception {
    pub id: String,
    pub company_id: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: String,
    pub exception_type: ExceptionType,
    pub criticality: Criticality,
    pub description: String,
    pub amount: f64,
    pub sign: Sign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<ReferenceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odoo_link: Option<String>,
    pub state: ExceptionState,
}
