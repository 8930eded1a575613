use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, FinancialMovement, Sign, TreasuryBalance};

/// Per-category share of movement volume over a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: Category,
    pub amount: f64,
    pub percentage: f64,
    pub count: usize,
}

/// Monthly inflow/outflow totals with the average running balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPeriod {
    pub period: String,
    pub inflow: f64,
    pub outflow: f64,
    pub net_flow: f64,
    pub avg_daily_balance: f64,
}

fn in_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |min| date >= min) && to.map_or(true, |max| date <= max)
}

/// Totals movement volume per category, with each category's share of the
/// grand total, largest first. Sign is ignored: amounts are magnitudes and
/// the breakdown reports volume, not net position.
pub fn category_breakdown(
    movements: &[FinancialMovement],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<CategoryBreakdown> {
    let mut totals: BTreeMap<Category, (f64, usize)> = BTreeMap::new();
    for movement in movements
        .iter()
        .filter(|m| m.counts_for_analytics() && in_range(m.date, from, to))
    {
        let entry = totals.entry(movement.category).or_insert((0.0, 0));
        entry.0 += movement.amount;
        entry.1 += 1;
    }

    let grand_total: f64 = totals.values().map(|(amount, _)| amount).sum();
    let mut breakdown: Vec<CategoryBreakdown> = totals
        .into_iter()
        .map(|(category, (amount, count))| CategoryBreakdown {
            category,
            amount,
            percentage: if grand_total > 0.0 {
                amount / grand_total * 100.0
            } else {
                0.0
            },
            count,
        })
        .collect();
    breakdown.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    breakdown
}

/// Groups movements into calendar months, chronologically, tracking the
/// running balance from the treasury anchor to report each month's average
/// balance alongside its flow totals. Returns an empty series when no
/// movement falls in the range.
pub fn cash_flow_by_month(
    baseline: &TreasuryBalance,
    movements: &[FinancialMovement],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<CashFlowPeriod> {
    let mut selected: Vec<&FinancialMovement> = movements
        .iter()
        .filter(|m| m.counts_for_analytics() && in_range(m.date, from, to))
        .collect();
    selected.sort_by_key(|m| m.date);

    struct MonthAccumulator {
        label: String,
        inflow: f64,
        outflow: f64,
        balances: Vec<f64>,
    }

    let mut months: BTreeMap<(i32, u32), MonthAccumulator> = BTreeMap::new();
    let mut running_balance = baseline.amount;
    for movement in selected {
        let key = (movement.date.year(), movement.date.month());
        let entry = months.entry(key).or_insert_with(|| MonthAccumulator {
            label: movement.date.format("%b %Y").to_string(),
            inflow: 0.0,
            outflow: 0.0,
            balances: Vec::new(),
        });
        match movement.sign {
            Sign::Inflow => {
                entry.inflow += movement.amount;
                running_balance += movement.amount;
            }
            Sign::Outflow => {
                entry.outflow += movement.amount;
                running_balance -= movement.amount;
            }
        }
        entry.balances.push(running_balance);
    }

    months
        .into_values()
        .map(|acc| CashFlowPeriod {
            period: acc.label,
            inflow: acc.inflow,
            outflow: acc.outflow,
            net_flow: acc.inflow - acc.outflow,
            avg_daily_balance: acc.balances.iter().sum::<f64>() / acc.balances.len() as f64,
        })
        .collect()
}
