//! Twelve-month cash-flow projection

mod cashflows;
mod engine;

pub use cashflows::{MonthlyCashflowRow, MonthlyProjection, ProjectionSummary, COLUMNS};
pub use engine::{project_from_metrics, project_monthly_cash_flows, PROJECTION_MONTHS};
