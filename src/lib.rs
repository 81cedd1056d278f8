//! 8-Plex Model - Investment metrics engine for an 8-unit rental property
//!
//! This library provides:
//! - Baseline assumptions derived from a reference workbook export
//! - Implied mortgage rate recovery from the stored payment schedule
//! - NOI, cash flow, cash-on-cash, DSCR and cap rate calculations
//! - A flat 12-month cash-flow projection
//! - What-if scenarios and parallel sensitivity grids

pub mod error;
pub mod reference;
pub mod loan;
pub mod assumptions;
pub mod metrics;
pub mod projection;
pub mod scenario;
pub mod conformance;
pub mod format;

// Re-export commonly used types
pub use error::{ModelError, ModelResult};
pub use assumptions::{
    load_baseline, AssumptionOverrides, Assumptions, BaselineSnapshot, OtherIncomeAssumption,
    UnitAssumption,
};
pub use metrics::{calculate_metrics, Metrics};
pub use projection::{project_monthly_cash_flows, MonthlyCashflowRow, MonthlyProjection};
pub use reference::{CellValue, ReferenceSource, Workbook};
pub use scenario::{ScenarioResult, ScenarioRunner};
