//! Monthly projection built on the annual metrics
//!
//! Every month carries one twelfth of the annual figures: no rent escalation,
//! no seasonality and no amortization paydown within the year.

use super::cashflows::{MonthlyCashflowRow, MonthlyProjection};
use crate::assumptions::Assumptions;
use crate::metrics::{calculate_metrics, Metrics};

/// Number of projected months
pub const PROJECTION_MONTHS: u32 = 12;

/// Project twelve months of cash flow for a set of assumptions
pub fn project_monthly_cash_flows(assumptions: &Assumptions) -> MonthlyProjection {
    project_from_metrics(&calculate_metrics(assumptions))
}

/// Project twelve months from already-computed metrics
pub fn project_from_metrics(metrics: &Metrics) -> MonthlyProjection {
    let gross_rent = metrics.gross_rent_annual / 12.0;
    let other_income = metrics.other_income_annual / 12.0;
    let operating_expenses = metrics.operating_expenses_annual / 12.0;
    let debt_service = metrics.debt_service_annual / 12.0;
    let net_cash_flow = gross_rent + other_income - operating_expenses - debt_service;

    let rows = (1..=PROJECTION_MONTHS)
        .map(|month| MonthlyCashflowRow {
            month,
            gross_rent,
            other_income,
            operating_expenses,
            debt_service,
            net_cash_flow,
        })
        .collect();

    MonthlyProjection { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::load_baseline;
    use crate::projection::COLUMNS;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_projection_aligns_with_annual_cash_flow() {
        let assumptions = load_baseline().expect("Failed to load baseline");
        let projection = project_monthly_cash_flows(&assumptions);
        let metrics = calculate_metrics(&assumptions);

        assert_eq!(projection.len(), 12);
        for column in ["Month", "Gross Rent", "Net Cash Flow"] {
            assert!(projection.columns().contains(&column));
        }

        let total: f64 = projection.column("Net Cash Flow").unwrap().iter().sum();
        assert_relative_eq!(total, metrics.cash_flow, max_relative = 1e-4);
    }

    #[test]
    fn test_rows_are_flat_and_numbered() {
        let projection = project_monthly_cash_flows(&load_baseline().unwrap());
        let first = &projection.rows[0];

        for (i, row) in projection.rows.iter().enumerate() {
            assert_eq!(row.month, i as u32 + 1);
            assert_eq!(row.gross_rent, first.gross_rent);
            assert_eq!(row.net_cash_flow, first.net_cash_flow);
        }
        assert_relative_eq!(
            first.net_cash_flow,
            first.total_income() - first.operating_expenses - first.debt_service
        );
    }

    #[test]
    fn test_summary_matches_annual_metrics() {
        let assumptions = load_baseline().unwrap();
        let metrics = calculate_metrics(&assumptions);
        let summary = project_monthly_cash_flows(&assumptions).summary();

        assert_eq!(summary.total_months, 12);
        assert_relative_eq!(summary.total_gross_rent, metrics.gross_rent_annual, max_relative = 1e-12);
        assert_relative_eq!(summary.total_debt_service, metrics.debt_service_annual, max_relative = 1e-12);
        assert_relative_eq!(summary.total_net_cash_flow, metrics.cash_flow, max_relative = 1e-9);
    }

    #[test]
    fn test_empty_assumptions_still_twelve_rows() {
        let projection = project_monthly_cash_flows(&Assumptions::default());
        assert_eq!(projection.len(), 12);
        assert!(projection.rows.iter().all(|r| r.net_cash_flow == 0.0));
    }

    #[test]
    fn test_unknown_column() {
        let projection = project_monthly_cash_flows(&Assumptions::default());
        assert!(projection.column("Vacancy").is_none());
        assert_eq!(projection.column("Month").unwrap().len(), 12);
    }

    #[test]
    fn test_write_csv_headers() {
        let projection = project_monthly_cash_flows(&load_baseline().unwrap());
        let mut buffer = Vec::new();
        projection.write_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), COLUMNS.join(","));
        assert_eq!(lines.count(), 12);
    }
}
