//! Comparison of computed metrics against the outputs stored in the workbook

use crate::metrics::Metrics;
use crate::reference::{cells, ReferenceSource};
use serde::Serialize;

/// Relative tolerance for a metric to count as matching the workbook
pub const RELATIVE_TOLERANCE: f64 = 1e-4;
/// Absolute tolerance, so values near zero are not judged on relative error alone
pub const ABSOLUTE_TOLERANCE: f64 = 1e-2;

#[derive(Debug, Clone, Serialize)]
pub struct ConformanceCheck {
    pub metric: &'static str,
    pub cell: String,
    pub expected: Option<f64>,
    pub actual: f64,
}

impl ConformanceCheck {
    pub fn difference(&self) -> Option<f64> {
        self.expected.map(|expected| self.actual - expected)
    }

    /// Within either tolerance; a missing workbook value never matches
    pub fn within_tolerance(&self) -> bool {
        match self.expected {
            Some(expected) => {
                let diff = (self.actual - expected).abs();
                diff <= ABSOLUTE_TOLERANCE || diff <= RELATIVE_TOLERANCE * expected.abs()
            }
            None => false,
        }
    }
}

/// Check each stored workbook output against the computed metrics
pub fn compare(metrics: &Metrics, source: &dyn ReferenceSource) -> Vec<ConformanceCheck> {
    cells::OUTPUT_CELLS
        .iter()
        .map(|&(metric, at)| {
            let check = ConformanceCheck {
                metric,
                cell: at.to_string(),
                expected: source.read_ref(at).as_number(),
                actual: metrics.get(metric).unwrap_or(0.0),
            };
            if !check.within_tolerance() {
                log::warn!(
                    "{} differs from workbook {}: expected {:?}, got {:.6}",
                    metric,
                    check.cell,
                    check.expected,
                    check.actual
                );
            }
            check
        })
        .collect()
}
