//! Headline investment metrics: NOI, cash flow, cash-on-cash, DSCR, cap rate
//!
//! Every ratio with a zero denominator resolves to 0 rather than failing, so a
//! transient zero or empty input during editing always yields finite metrics.

use crate::assumptions::Assumptions;
use crate::loan::monthly_payment;
use serde::{Deserialize, Serialize};

/// Annual income, expense and financing figures plus the derived ratios
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub noi: f64,
    pub cash_flow: f64,
    pub cash_on_cash: f64,
    pub dscr: f64,
    pub cap_rate: f64,
    pub gross_rent_annual: f64,
    pub other_income_annual: f64,
    pub operating_expenses_annual: f64,
    pub total_income_annual: f64,
    pub debt_service_annual: f64,
    pub monthly_debt_service: f64,
    pub equity_required: f64,
    pub loan_principal: f64,
    pub total_loan: f64,
}

/// Metric names in display order
pub const METRIC_NAMES: [&str; 14] = [
    "noi",
    "cash_flow",
    "cash_on_cash",
    "dscr",
    "cap_rate",
    "gross_rent_annual",
    "other_income_annual",
    "operating_expenses_annual",
    "total_income_annual",
    "debt_service_annual",
    "monthly_debt_service",
    "equity_required",
    "loan_principal",
    "total_loan",
];

impl Metrics {
    /// Look up a metric by name
    pub fn get(&self, name: &str) -> Option<f64> {
        let value = match name {
            "noi" => self.noi,
            "cash_flow" => self.cash_flow,
            "cash_on_cash" => self.cash_on_cash,
            "dscr" => self.dscr,
            "cap_rate" => self.cap_rate,
            "gross_rent_annual" => self.gross_rent_annual,
            "other_income_annual" => self.other_income_annual,
            "operating_expenses_annual" => self.operating_expenses_annual,
            "total_income_annual" => self.total_income_annual,
            "debt_service_annual" => self.debt_service_annual,
            "monthly_debt_service" => self.monthly_debt_service,
            "equity_required" => self.equity_required,
            "loan_principal" => self.loan_principal,
            "total_loan" => self.total_loan,
            _ => return None,
        };
        Some(value)
    }

    /// Flat name -> value view in `METRIC_NAMES` order
    pub fn to_map(&self) -> Vec<(&'static str, f64)> {
        METRIC_NAMES
            .iter()
            .filter_map(|&name| self.get(name).map(|value| (name, value)))
            .collect()
    }

    pub fn is_finite(&self) -> bool {
        self.to_map().iter().all(|(_, v)| v.is_finite())
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Calculate all metrics for a set of assumptions
pub fn calculate_metrics(assumptions: &Assumptions) -> Metrics {
    let gross_rent_annual: f64 =
        assumptions.unit_mix.iter().map(|u| u.monthly_rent()).sum::<f64>() * 12.0;
    let other_income_annual: f64 = assumptions
        .other_income_items
        .iter()
        .map(|item| item.monthly_income())
        .sum::<f64>()
        * 12.0;
    let total_income_annual = gross_rent_annual + other_income_annual;

    let operating_expenses_annual = assumptions.annual_operating_expenses();
    let noi = total_income_annual - operating_expenses_annual;

    // Financing
    let acquisition_cost = assumptions.purchase_price + assumptions.broker_fee;
    let equity_required = acquisition_cost * assumptions.effective_deposit_pct();
    let loan_principal = acquisition_cost - equity_required;
    let total_loan = loan_principal * (1.0 + assumptions.cmhc_premium_rate);

    let monthly_debt_service =
        monthly_payment(assumptions.interest_rate, assumptions.amort_years, total_loan);
    let debt_service_annual = monthly_debt_service * 12.0;

    let cash_flow = noi - debt_service_annual;

    Metrics {
        noi,
        cash_flow,
        cash_on_cash: ratio(cash_flow, equity_required),
        dscr: ratio(noi, debt_service_annual),
        cap_rate: ratio(noi, assumptions.purchase_price),
        gross_rent_annual,
        other_income_annual,
        operating_expenses_annual,
        total_income_annual,
        debt_service_annual,
        monthly_debt_service,
        equity_required,
        loan_principal,
        total_loan,
    }
}
