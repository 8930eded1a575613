use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::types::{Category, RecordStatus, ReferenceType, Sign, Source, Visibility};

/// A dated cash movement sourced from the ERP sync or a manual entry.
///
/// Records are owned by the backing API; this crate only reads them for
/// filtering and analytics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMovement {
    pub id: String,
    pub company_id: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub sign: Sign,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<ReferenceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odoo_link: Option<String>,
    pub source: Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub visibility: Visibility,
    pub status: RecordStatus,
    #[serde(default)]
    pub exclude_from_analytics: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivation_reason: Option<String>,
}

impl FinancialMovement {
    /// Whether the movement participates in forecast and breakdown figures.
    pub fn counts_for_analytics(&self) -> bool {
        self.status == RecordStatus::Active && !self.exclude_from_analytics
    }

    /// Signed contribution to a running balance.
    pub fn net_amount(&self) -> f64 {
        match self.sign {
            Sign::Inflow => self.amount,
            Sign::Outflow => -self.amount,
        }
    }
}
