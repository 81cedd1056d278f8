//! User edits applied on top of the baseline
//!
//! Mirrors the dashboard controls: purchase price, the two unit rents, the
//! annual operating expense total, interest rate and loan-to-value.

use super::Assumptions;
use serde::{Deserialize, Serialize};

/// Optional scalar overrides; `None` keeps the baseline value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssumptionOverrides {
    pub purchase_price: Option<f64>,
    /// Monthly rent for the first unit row (3 bedroom upper)
    pub upper_rent: Option<f64>,
    /// Monthly rent for the second unit row (2 bedroom lower)
    pub lower_rent: Option<f64>,
    /// Annual operating expense total; categories are rescaled proportionally
    pub operating_expense_total: Option<f64>,
    /// Annual interest rate in percent (4.5 = 4.5%)
    pub interest_rate_pct: Option<f64>,
    /// Loan-to-value in percent (80 = 80%)
    pub loan_to_value_pct: Option<f64>,
}

/// Zero is treated like an empty input for the price, rent and expense fields
fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

impl AssumptionOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the overrides to `assumptions` in place
    ///
    /// `baseline_opex_total` is the unedited operating expense total; category
    /// amounts are scaled by `new_total / baseline_opex_total`. Individual
    /// categories cannot be edited, so the total and breakdown stay in step.
    pub fn apply(&self, assumptions: &mut Assumptions, baseline_opex_total: f64) {
        if let Some(price) = non_zero(self.purchase_price) {
            assumptions.purchase_price = price;
        }
        if let Some(rent) = non_zero(self.upper_rent) {
            if let Some(unit) = assumptions.unit_mix.get_mut(0) {
                unit.rent = rent;
            }
        }
        if let Some(rent) = non_zero(self.lower_rent) {
            if let Some(unit) = assumptions.unit_mix.get_mut(1) {
                unit.rent = rent;
            }
        }
        if let Some(total) = non_zero(self.operating_expense_total) {
            assumptions.operating_expense_total = total;
            let scale = if baseline_opex_total != 0.0 {
                total / baseline_opex_total
            } else {
                1.0
            };
            assumptions.rescale_operating_expenses(scale);
        }
        if let Some(rate_pct) = self.interest_rate_pct {
            assumptions.interest_rate = rate_pct / 100.0;
        }
        if let Some(ltv_pct) = self.loan_to_value_pct {
            assumptions.set_loan_to_value(ltv_pct / 100.0);
        }
    }

    /// Copy of `baseline` with the overrides applied
    pub fn applied_to(&self, baseline: &Assumptions) -> Assumptions {
        let mut assumptions = baseline.clone();
        self.apply(&mut assumptions, baseline.operating_expense_total);
        assumptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::UnitAssumption;
    use approx::assert_relative_eq;

    fn baseline() -> Assumptions {
        let mut assumptions = Assumptions {
            purchase_price: 1_000_000.0,
            deposit_pct: 0.2,
            loan_to_value: Some(0.8),
            interest_rate: 0.05,
            operating_expense_total: 40_000.0,
            unit_mix: vec![
                UnitAssumption::new("3 Bedroom Upper", 4.0, 2_000.0),
                UnitAssumption::new("2 Bedroom Lower", 4.0, 1_500.0),
            ],
            ..Default::default()
        };
        assumptions.operating_expenses.insert("Taxes".into(), 30_000.0);
        assumptions.operating_expenses.insert("Insurance".into(), 10_000.0);
        assumptions
    }

    #[test]
    fn test_empty_overrides_keep_baseline() {
        let base = baseline();
        let overrides = AssumptionOverrides::default();
        assert!(overrides.is_empty());
        assert_eq!(overrides.applied_to(&base), base);
    }

    #[test]
    fn test_opex_total_rescales_categories() {
        let base = baseline();
        let overrides = AssumptionOverrides {
            operating_expense_total: Some(60_000.0),
            ..Default::default()
        };
        let edited = overrides.applied_to(&base);

        assert_eq!(edited.operating_expense_total, 60_000.0);
        assert_relative_eq!(edited.operating_expenses["Taxes"], 45_000.0);
        assert_relative_eq!(edited.operating_expenses["Insurance"], 15_000.0);
        assert_relative_eq!(edited.operating_expense_breakdown_total(), 60_000.0);
        // Baseline untouched
        assert_eq!(base.operating_expenses["Taxes"], 30_000.0);
    }

    #[test]
    fn test_opex_with_zero_baseline_total_keeps_categories() {
        let mut base = baseline();
        let overrides = AssumptionOverrides {
            operating_expense_total: Some(50_000.0),
            ..Default::default()
        };
        overrides.apply(&mut base, 0.0);
        assert_eq!(base.operating_expense_total, 50_000.0);
        assert_eq!(base.operating_expenses["Taxes"], 30_000.0);
    }

    #[test]
    fn test_rate_and_ltv_percentages() {
        let overrides = AssumptionOverrides {
            interest_rate_pct: Some(4.25),
            loan_to_value_pct: Some(65.0),
            ..Default::default()
        };
        let edited = overrides.applied_to(&baseline());

        assert_relative_eq!(edited.interest_rate, 0.0425, epsilon = 1e-12);
        assert_relative_eq!(edited.loan_to_value.unwrap(), 0.65, epsilon = 1e-12);
        assert_relative_eq!(edited.deposit_pct, 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_price_and_rents() {
        let overrides = AssumptionOverrides {
            purchase_price: Some(1_200_000.0),
            upper_rent: Some(2_400.0),
            lower_rent: Some(0.0),
            ..Default::default()
        };
        let edited = overrides.applied_to(&baseline());

        assert_eq!(edited.purchase_price, 1_200_000.0);
        assert_eq!(edited.unit_mix[0].rent, 2_400.0);
        // Zero rent is ignored like an empty control
        assert_eq!(edited.unit_mix[1].rent, 1_500.0);
    }

    #[test]
    fn test_rent_override_without_units_is_ignored() {
        let mut base = Assumptions::default();
        let overrides = AssumptionOverrides {
            upper_rent: Some(2_000.0),
            lower_rent: Some(1_000.0),
            ..Default::default()
        };
        overrides.apply(&mut base, 0.0);
        assert!(base.unit_mix.is_empty());
    }
}
