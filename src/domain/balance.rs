use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The configured treasury baseline: the known cash position of a company on
/// a reference date. Every forecast walks forward from this anchor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryBalance {
    pub company_id: String,
    pub amount: f64,
    pub reference_date: NaiveDate,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}
