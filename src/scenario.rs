//! Scenario runner for what-if analysis
//!
//! Holds the baseline snapshot once, then evaluates any number of override sets
//! against independent copies of it. Batches and sensitivity grids run in
//! parallel; each worker only reads the snapshot.

use crate::assumptions::{AssumptionOverrides, Assumptions, BaselineSnapshot};
use crate::error::ModelResult;
use crate::metrics::{calculate_metrics, Metrics};
use crate::projection::{project_from_metrics, MonthlyProjection};
use rayon::prelude::*;
use serde::Serialize;

/// Assumptions actually used plus the resulting metrics and projection
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub assumptions: Assumptions,
    pub metrics: Metrics,
    pub projection: MonthlyProjection,
}

/// One cell of a rate x rent sensitivity grid
#[derive(Debug, Clone, Serialize)]
pub struct SensitivityPoint {
    pub interest_rate_pct: f64,
    /// Rent change applied to every unit, in percent (5 = +5%)
    pub rent_change_pct: f64,
    pub metrics: Metrics,
}

#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    baseline: BaselineSnapshot,
}

impl ScenarioRunner {
    /// Runner over the process-wide baseline
    pub fn from_default() -> ModelResult<Self> {
        Ok(Self {
            baseline: crate::assumptions::default_baseline()?.clone(),
        })
    }

    pub fn with_baseline(baseline: BaselineSnapshot) -> Self {
        Self { baseline }
    }

    pub fn baseline(&self) -> &Assumptions {
        self.baseline.assumptions()
    }

    /// Evaluate one set of overrides
    pub fn run(&self, overrides: &AssumptionOverrides) -> ScenarioResult {
        let mut assumptions = self.baseline.load();
        overrides.apply(&mut assumptions, self.baseline().operating_expense_total);
        evaluate(assumptions)
    }

    /// Evaluate several override sets in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[AssumptionOverrides]) -> Vec<ScenarioResult> {
        scenarios.par_iter().map(|overrides| self.run(overrides)).collect()
    }

    /// Metrics for every combination of interest rate and uniform rent change
    ///
    /// Points are ordered rate-major, in the order the inputs are given.
    pub fn sensitivity_grid(&self, rates_pct: &[f64], rent_changes_pct: &[f64]) -> Vec<SensitivityPoint> {
        let combinations: Vec<(f64, f64)> = rates_pct
            .iter()
            .flat_map(|&rate| rent_changes_pct.iter().map(move |&rent| (rate, rent)))
            .collect();

        log::debug!("Evaluating {} sensitivity points", combinations.len());

        combinations
            .par_iter()
            .map(|&(interest_rate_pct, rent_change_pct)| {
                let mut assumptions = self.baseline.load();
                assumptions.interest_rate = interest_rate_pct / 100.0;
                let factor = 1.0 + rent_change_pct / 100.0;
                for unit in &mut assumptions.unit_mix {
                    unit.rent *= factor;
                }
                SensitivityPoint {
                    interest_rate_pct,
                    rent_change_pct,
                    metrics: calculate_metrics(&assumptions),
                }
            })
            .collect()
    }
}

/// Metrics and projection for a fully prepared set of assumptions
pub fn evaluate(assumptions: Assumptions) -> ScenarioResult {
    let metrics = calculate_metrics(&assumptions);
    let projection = project_from_metrics(&metrics);
    ScenarioResult {
        assumptions,
        metrics,
        projection,
    }
}
