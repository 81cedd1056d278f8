//! Cashflow output structures for the monthly projection

use crate::error::ModelResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Column headers, in output order
pub const COLUMNS: [&str; 6] = [
    "Month",
    "Gross Rent",
    "Other Income",
    "Operating Expenses",
    "Debt Service",
    "Net Cash Flow",
];

/// A single month of projected cash flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCashflowRow {
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Gross Rent")]
    pub gross_rent: f64,
    #[serde(rename = "Other Income")]
    pub other_income: f64,
    #[serde(rename = "Operating Expenses")]
    pub operating_expenses: f64,
    #[serde(rename = "Debt Service")]
    pub debt_service: f64,
    #[serde(rename = "Net Cash Flow")]
    pub net_cash_flow: f64,
}

impl MonthlyCashflowRow {
    pub fn total_income(&self) -> f64 {
        self.gross_rent + self.other_income
    }

    /// Value of a column by header name
    pub fn value(&self, column: &str) -> Option<f64> {
        let value = match column {
            "Month" => f64::from(self.month),
            "Gross Rent" => self.gross_rent,
            "Other Income" => self.other_income,
            "Operating Expenses" => self.operating_expenses,
            "Debt Service" => self.debt_service,
            "Net Cash Flow" => self.net_cash_flow,
            _ => return None,
        };
        Some(value)
    }
}

/// Ordered monthly rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub rows: Vec<MonthlyCashflowRow>,
}

impl MonthlyProjection {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    /// All values of one column, or `None` for an unknown header
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        if !COLUMNS.contains(&name) {
            return None;
        }
        Some(self.rows.iter().filter_map(|row| row.value(name)).collect())
    }

    /// Totals over the projected months
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            total_months: self.rows.len() as u32,
            total_gross_rent: self.rows.iter().map(|r| r.gross_rent).sum(),
            total_other_income: self.rows.iter().map(|r| r.other_income).sum(),
            total_operating_expenses: self.rows.iter().map(|r| r.operating_expenses).sum(),
            total_debt_service: self.rows.iter().map(|r| r.debt_service).sum(),
            total_net_cash_flow: self.rows.iter().map(|r| r.net_cash_flow).sum(),
        }
    }

    /// Write the rows as CSV with the standard column headers
    pub fn write_csv<W: Write>(&self, writer: W) -> ModelResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Totals for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_gross_rent: f64,
    pub total_other_income: f64,
    pub total_operating_expenses: f64,
    pub total_debt_service: f64,
    pub total_net_cash_flow: f64,
}
