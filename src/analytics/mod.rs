//! Forecast construction, simulation overlay, and aggregate views consumed
//! by the analytics pages.

pub mod breakdown;
pub mod forecast;
pub mod metrics;

pub use breakdown::{cash_flow_by_month, category_breakdown, CashFlowPeriod, CategoryBreakdown};
pub use forecast::{baseline_forecast, overlay_simulation, ForecastPoint, SimulationPoint};
pub use metrics::{treasury_metrics, TreasuryMetrics};
