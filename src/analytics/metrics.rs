use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{FinancialMovement, Sign, TreasuryBalance};

/// Headline treasury figures for the dashboard tiles: the configured current
/// balance plus 30- and 90-day projections derived from future movements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryMetrics {
    pub current_balance: f64,
    #[serde(rename = "projectedBalance30d")]
    pub projected_balance_30d: f64,
    #[serde(rename = "projectedBalance90d")]
    pub projected_balance_90d: f64,
    #[serde(rename = "totalInflow30d")]
    pub total_inflow_30d: f64,
    #[serde(rename = "totalOutflow30d")]
    pub total_outflow_30d: f64,
    #[serde(rename = "netCashFlow30d")]
    pub net_cash_flow_30d: f64,
    pub avg_daily_inflow: f64,
    pub avg_daily_outflow: f64,
    #[serde(rename = "balanceChange30d")]
    pub balance_change_30d: f64,
    #[serde(rename = "balanceChangePercent30d")]
    pub balance_change_percent_30d: f64,
}

/// Computes the metric block from the treasury anchor and the company's
/// movements. Only strictly-future movements inside each horizon contribute
/// to projections; past movements are already reflected in the anchor.
pub fn treasury_metrics(
    baseline: &TreasuryBalance,
    movements: &[FinancialMovement],
    today: NaiveDate,
) -> TreasuryMetrics {
    let horizon_30d = today + Duration::days(30);
    let horizon_90d = today + Duration::days(90);

    let mut total_inflow_30d = 0.0;
    let mut total_outflow_30d = 0.0;
    let mut projected_balance_30d = baseline.amount;
    let mut projected_balance_90d = baseline.amount;

    for movement in movements.iter().filter(|m| m.counts_for_analytics()) {
        if movement.date <= today {
            continue;
        }
        if movement.date <= horizon_30d {
            match movement.sign {
                Sign::Inflow => total_inflow_30d += movement.amount,
                Sign::Outflow => total_outflow_30d += movement.amount,
            }
            projected_balance_30d += movement.net_amount();
        }
        if movement.date <= horizon_90d {
            projected_balance_90d += movement.net_amount();
        }
    }

    let balance_change_30d = projected_balance_30d - baseline.amount;
    TreasuryMetrics {
        current_balance: baseline.amount,
        projected_balance_30d,
        projected_balance_90d,
        total_inflow_30d,
        total_outflow_30d,
        net_cash_flow_30d: total_inflow_30d - total_outflow_30d,
        avg_daily_inflow: total_inflow_30d / 30.0,
        avg_daily_outflow: total_outflow_30d / 30.0,
        balance_change_30d,
        balance_change_percent_30d: if baseline.amount != 0.0 {
            balance_change_30d / baseline.amount * 100.0
        } else {
            0.0
        },
    }
}
