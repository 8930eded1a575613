use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{FinancialMovement, Sign, TreasuryBalance};
use crate::simulation::GeneratedMovement;

/// One day of the baseline forecast: the balance projection without any
/// simulation overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// Running balance on days up to `today`; `None` for future days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_balance: Option<f64>,
    pub predicted_balance: f64,
    pub inflow: f64,
    pub outflow: f64,
    pub net_change: f64,
}

/// A forecast day after the simulation overlay. `baseline_balance` keeps the
/// original projection so both curves can be charted side by side;
/// `simulation_inflow`/`simulation_outflow` attribute the per-date impact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationPoint {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_balance: Option<f64>,
    pub baseline_balance: f64,
    pub predicted_balance: f64,
    pub inflow: f64,
    pub outflow: f64,
    pub net_change: f64,
    pub simulation_inflow: f64,
    pub simulation_outflow: f64,
}

#[derive(Default, Clone, Copy)]
struct DailyFlow {
    inflow: f64,
    outflow: f64,
}

/// Builds the daily baseline series from the configured treasury anchor and
/// the company's dated movements, walking `start..=end` one day at a time
/// with a running balance. Inactive movements and movements excluded from
/// analytics do not contribute.
pub fn baseline_forecast(
    baseline: &TreasuryBalance,
    movements: &[FinancialMovement],
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Vec<ForecastPoint> {
    let mut flows: HashMap<NaiveDate, DailyFlow> = HashMap::new();
    for movement in movements.iter().filter(|m| m.counts_for_analytics()) {
        let entry = flows.entry(movement.date).or_default();
        match movement.sign {
            Sign::Inflow => entry.inflow += movement.amount,
            Sign::Outflow => entry.outflow += movement.amount,
        }
    }

    let mut series = Vec::new();
    let mut balance = baseline.amount;
    let mut date = start;
    while date <= end {
        let flow = flows.get(&date).copied().unwrap_or_default();
        let net_change = flow.inflow - flow.outflow;
        series.push(ForecastPoint {
            date,
            actual_balance: (date <= today).then_some(balance),
            predicted_balance: balance + net_change,
            inflow: flow.inflow,
            outflow: flow.outflow,
            net_change,
        });
        balance += net_change;
        date = date + Duration::days(1);
    }
    series
}

/// Overlays flattened simulation events onto a baseline series.
///
/// Events are grouped by date, and a cumulative delta carries each day's
/// simulation impact forward: an event on date D moves the predicted balance
/// on D and every later day, never an earlier one. With no events the output
/// is the baseline unchanged, tagged with `baseline_balance` for chart
/// parity.
pub fn overlay_simulation(
    baseline: &[ForecastPoint],
    events: &[GeneratedMovement],
) -> Vec<SimulationPoint> {
    let mut flows: HashMap<NaiveDate, DailyFlow> = HashMap::new();
    for event in events {
        let entry = flows.entry(event.date).or_default();
        match event.sign {
            Sign::Inflow => entry.inflow += event.amount,
            Sign::Outflow => entry.outflow += event.amount,
        }
    }

    let mut cumulative_delta = 0.0;
    baseline
        .iter()
        .map(|point| {
            let flow = flows.get(&point.date).copied().unwrap_or_default();
            cumulative_delta += flow.inflow - flow.outflow;
            SimulationPoint {
                date: point.date,
                actual_balance: point.actual_balance,
                baseline_balance: point.predicted_balance,
                predicted_balance: point.predicted_balance + cumulative_delta,
                inflow: point.inflow + flow.inflow,
                outflow: point.outflow + flow.outflow,
                net_change: point.net_change,
                simulation_inflow: flow.inflow,
                simulation_outflow: flow.outflow,
            }
        })
        .collect()
}
