use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::types::{Category, Frequency, RecordStatus, ReferenceType, Sign, Visibility};

/// A user-authored cash-flow entry. The backing API expands recurring entries
/// into concrete [`FinancialMovement`](super::FinancialMovement) rows; the
/// entry itself keeps the recurrence definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManualEntry {
    pub id: String,
    pub company_id: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<ReferenceType>,
    pub amount: f64,
    pub sign: Sign,
    pub frequency: Frequency,
    // The API keeps these two in snake_case.
    #[serde(rename = "start_date")]
    pub start_date: NaiveDate,
    #[serde(rename = "end_date", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub visibility: Visibility,
    pub status: RecordStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_state: Option<String>,
}
