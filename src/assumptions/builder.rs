//! Baseline assumption builder
//!
//! Reads the fixed coordinate table from a [`ReferenceSource`] and derives the
//! values the workbook does not store directly: the implied interest rate,
//! bedroom counts, the mortgage insurance premium rate and loan-to-value.

use super::{Assumptions, OtherIncomeAssumption, UnitAssumption};
use crate::error::ModelResult;
use crate::loan::implied_annual_rate;
use crate::reference::{cells, optional_number, require_number, require_text, ReferenceSource};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn bedroom_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)(\d+)\s*bed").expect("valid bedroom pattern"))
}

/// Bedroom count from a unit-type label such as "3 Bedroom Upper"
///
/// Best effort: returns 0 when the label has no "<digits> bed" token.
pub fn infer_bedrooms(label: &str) -> f64 {
    bedroom_pattern()
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Build the baseline assumptions from the reference data
pub fn build_baseline(source: &dyn ReferenceSource) -> ModelResult<Assumptions> {
    let purchase_price = require_number(source, "purchase_price", cells::PURCHASE_PRICE)?;
    let broker_fee = require_number(source, "broker_fee", cells::BROKER_FEE)?;
    let deposit_pct = require_number(source, "deposit_pct", cells::DEPOSIT_PCT)?;
    let deposit_amount = require_number(source, "deposit_amount", cells::DEPOSIT_AMOUNT)?;
    let closing_rebate = require_number(source, "closing_rebate", cells::CLOSING_REBATE)?;
    let operating_expense_total =
        require_number(source, "total_operating_expenses", cells::TOTAL_OPERATING_EXPENSES)?;
    let loan_amount = require_number(source, "loan_amount", cells::LOAN_AMOUNT)?;
    let cmhc_premium_amount =
        require_number(source, "cmhc_premium_amount", cells::CMHC_PREMIUM_AMOUNT)?;
    // Truncated like a spreadsheet INT(); negative terms collapse to zero
    let amort_years = require_number(source, "amort_years", cells::AMORT_YEARS)?.trunc().max(0.0) as u32;

    let base_payment =
        optional_number(source, "mortgage_monthly_payment", cells::MORTGAGE_MONTHLY_PAYMENT)?;
    let premium_payment =
        optional_number(source, "premium_monthly_payment", cells::PREMIUM_MONTHLY_PAYMENT)?;

    let interest_rate = match implied_annual_rate(
        base_payment + premium_payment,
        loan_amount + cmhc_premium_amount,
        amort_years,
    ) {
        Some(rate) => {
            log::debug!("Implied interest rate {:.6} from payment schedule", rate);
            rate
        }
        None => {
            let stated = optional_number(source, "interest_rate", cells::INTEREST_RATE_FALLBACK)?;
            log::warn!(
                "Payment schedule not invertible (payment={:.2}, principal={:.2}, years={}); using stated rate {:.6}",
                base_payment + premium_payment,
                loan_amount + cmhc_premium_amount,
                amort_years,
                stated
            );
            stated
        }
    };

    let cmhc_premium_rate = if loan_amount > 0.0 {
        cmhc_premium_amount / loan_amount
    } else {
        0.0
    };

    let mut unit_mix = Vec::with_capacity(cells::UNIT_ROWS.len());
    for row in &cells::UNIT_ROWS {
        let name = require_text(source, row.key, row.label)?;
        unit_mix.push(UnitAssumption::new(
            name,
            require_number(source, row.key, row.units)?,
            require_number(source, row.key, row.rent)?,
        ));
    }

    let mut other_income_items = Vec::with_capacity(cells::OTHER_INCOME_ROWS.len());
    for row in &cells::OTHER_INCOME_ROWS {
        other_income_items.push(OtherIncomeAssumption {
            name: require_text(source, row.key, row.label)?,
            units: require_number(source, row.key, row.units)?,
            usage: require_number(source, row.key, row.usage)?,
            monthly_amount: require_number(source, row.key, row.monthly_amount)?,
        });
    }

    let mut operating_expenses = BTreeMap::new();
    for row in &cells::OPERATING_EXPENSE_ROWS {
        let label = require_text(source, row.key, row.label)?;
        operating_expenses.insert(label, require_number(source, row.key, row.value)?);
    }

    log::info!(
        "Built baseline: price={:.0}, rate={:.4}%, {} unit types, {} expense categories",
        purchase_price,
        interest_rate * 100.0,
        unit_mix.len(),
        operating_expenses.len()
    );

    Ok(Assumptions {
        purchase_price,
        broker_fee,
        deposit_pct,
        deposit_amount,
        closing_rebate,
        interest_rate,
        amort_years,
        loan_amount,
        cmhc_premium_rate,
        loan_to_value: Some(1.0 - deposit_pct),
        operating_expense_total,
        operating_expenses,
        unit_mix,
        other_income_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::reference::{CellValue, Workbook};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_infer_bedrooms() {
        assert_eq!(infer_bedrooms("3 Bedroom Upper"), 3.0);
        assert_eq!(infer_bedrooms("2bed lower"), 2.0);
        assert_eq!(infer_bedrooms("Unit 7 - 12  BEDS"), 12.0);
        assert_eq!(infer_bedrooms("Bachelor"), 0.0);
        assert_eq!(infer_bedrooms("Bed 3"), 0.0);
        assert_eq!(infer_bedrooms(""), 0.0);
    }

    #[test]
    fn test_build_from_default_workbook() {
        let workbook = Workbook::load_default().expect("Failed to load workbook");
        let baseline = build_baseline(&workbook).expect("Failed to build baseline");

        assert_eq!(baseline.purchase_price, 2_850_000.0);
        assert_eq!(baseline.amort_years, 40);
        assert_eq!(baseline.unit_mix.len(), 2);
        assert_eq!(baseline.unit_mix[0].bedrooms, 3.0);
        assert_eq!(baseline.unit_mix[1].bedrooms, 2.0);
        assert_eq!(baseline.other_income_items.len(), 2);
        assert_eq!(baseline.operating_expenses.len(), 8);
        assert_abs_diff_eq!(baseline.interest_rate, 0.0389, epsilon = 1e-6);
        assert_abs_diff_eq!(baseline.cmhc_premium_rate, 0.024, epsilon = 1e-12);
        assert_abs_diff_eq!(baseline.loan_to_value.unwrap(), 0.85, epsilon = 1e-12);
        assert_abs_diff_eq!(
            baseline.operating_expense_breakdown_total(),
            baseline.operating_expense_total,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_missing_required_cell_fails() {
        let mut workbook = Workbook::load_default().unwrap();
        workbook.insert("UofA", "C4", CellValue::Empty);

        let err = build_baseline(&workbook).unwrap_err();
        assert!(matches!(err, ModelError::MissingCell { ref field, .. } if field == "purchase_price"));
    }

    #[test]
    fn test_non_numeric_cell_fails() {
        let mut workbook = Workbook::load_default().unwrap();
        workbook.insert("UofA", "D12", CellValue::Text("call for pricing".into()));

        let err = build_baseline(&workbook).unwrap_err();
        assert!(matches!(err, ModelError::NotNumeric { ref cell, .. } if cell == "D12"));
    }

    #[test]
    fn test_falls_back_to_stated_rate_without_payments() {
        let mut workbook = Workbook::load_default().unwrap();
        workbook.insert("UofA", "H36", CellValue::Empty);
        workbook.insert("UofA", "H37", CellValue::Empty);
        workbook.insert("UofA", "E36", CellValue::Number(0.0475));

        let baseline = build_baseline(&workbook).unwrap();
        assert_eq!(baseline.interest_rate, 0.0475);

        workbook.insert("UofA", "E36", CellValue::Empty);
        let baseline = build_baseline(&workbook).unwrap();
        assert_eq!(baseline.interest_rate, 0.0);
    }

    #[test]
    fn test_zero_loan_has_zero_premium_rate() {
        let mut workbook = Workbook::load_default().unwrap();
        workbook.insert("UofA", "C36", CellValue::Number(0.0));

        let baseline = build_baseline(&workbook).unwrap();
        assert_eq!(baseline.cmhc_premium_rate, 0.0);
    }
}
