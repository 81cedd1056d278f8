//! Investment assumptions for the 8-plex: financing, rent roll, other income
//! and operating expenses

mod baseline;
mod builder;
mod overrides;

pub use baseline::{default_baseline, load_baseline, BaselineSnapshot, WORKBOOK_PATH_ENV};
pub use builder::{build_baseline, infer_bedrooms};
pub use overrides::AssumptionOverrides;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One unit-type row of the rent roll (e.g. "3 Bedroom Upper")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitAssumption {
    pub name: String,
    pub units: f64,
    /// Monthly rent per unit
    pub rent: f64,
    /// Inferred from `name`; display only
    #[serde(default)]
    pub bedrooms: f64,
}

impl UnitAssumption {
    pub fn new(name: impl Into<String>, units: f64, rent: f64) -> Self {
        let name = name.into();
        let bedrooms = infer_bedrooms(&name);
        Self { name, units, rent, bedrooms }
    }

    pub fn monthly_rent(&self) -> f64 {
        self.units * self.rent
    }
}

/// Ancillary income stream (laundry, pet fees, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherIncomeAssumption {
    pub name: String,
    pub units: f64,
    /// Fraction of units using the service
    pub usage: f64,
    pub monthly_amount: f64,
}

impl OtherIncomeAssumption {
    pub fn monthly_income(&self) -> f64 {
        self.units * self.usage * self.monthly_amount
    }
}

/// Container for all model assumptions
///
/// Missing fields deserialize to zero/empty so callers may supply partial input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub purchase_price: f64,
    pub broker_fee: f64,
    /// Down payment as a fraction of price plus fee
    pub deposit_pct: f64,
    pub deposit_amount: f64,
    pub closing_rebate: f64,
    /// Annual rate as a fraction
    pub interest_rate: f64,
    pub amort_years: u32,
    pub loan_amount: f64,
    /// Mortgage insurance premium as a fraction of the loan
    pub cmhc_premium_rate: f64,
    /// `1 - deposit_pct` when both are set; `None` means "derive from deposit_pct"
    pub loan_to_value: Option<f64>,
    /// Annual total; takes precedence over the category breakdown when positive
    pub operating_expense_total: f64,
    /// Annual amount by expense category
    pub operating_expenses: BTreeMap<String, f64>,
    pub unit_mix: Vec<UnitAssumption>,
    pub other_income_items: Vec<OtherIncomeAssumption>,
}

impl Assumptions {
    /// Deposit fraction actually used for financing, clamped to [0, 1]
    ///
    /// A non-zero `deposit_pct` wins; otherwise it is reconciled from
    /// `loan_to_value`.
    pub fn effective_deposit_pct(&self) -> f64 {
        let deposit_pct = if self.deposit_pct != 0.0 {
            self.deposit_pct
        } else {
            1.0 - self.loan_to_value.unwrap_or(1.0 - self.deposit_pct)
        };
        deposit_pct.clamp(0.0, 1.0)
    }

    /// Loan-to-value consistent with the effective deposit
    pub fn effective_loan_to_value(&self) -> f64 {
        1.0 - self.effective_deposit_pct()
    }

    /// Set loan-to-value and derive the matching deposit fraction
    pub fn set_loan_to_value(&mut self, loan_to_value: f64) {
        self.loan_to_value = Some(loan_to_value);
        self.deposit_pct = 1.0 - loan_to_value;
    }

    /// Sum of the per-category operating expenses
    pub fn operating_expense_breakdown_total(&self) -> f64 {
        self.operating_expenses.values().sum()
    }

    /// Annual operating expenses used by the metrics
    pub fn annual_operating_expenses(&self) -> f64 {
        if self.operating_expense_total > 0.0 {
            self.operating_expense_total
        } else {
            self.operating_expense_breakdown_total()
        }
    }

    /// Scale every expense category by `factor`
    pub fn rescale_operating_expenses(&mut self, factor: f64) {
        for value in self.operating_expenses.values_mut() {
            *value *= factor;
        }
    }

    pub fn total_units(&self) -> f64 {
        self.unit_mix.iter().map(|u| u.units).sum()
    }
}
