//! Read-only baseline snapshot with copy-on-read access
//!
//! The baseline is built once and never mutated. Callers only ever receive
//! independent clones, so edits to one copy are never observed by another.

use super::{build_baseline, Assumptions};
use crate::error::ModelResult;
use crate::reference::{ReferenceSource, Workbook, DEFAULT_WORKBOOK_PATH};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Environment variable overriding the workbook used by [`load_baseline`]
pub const WORKBOOK_PATH_ENV: &str = "PLEX_MODEL_WORKBOOK";

/// Immutable baseline assumptions
#[derive(Debug, Clone)]
pub struct BaselineSnapshot {
    assumptions: Arc<Assumptions>,
}

impl BaselineSnapshot {
    /// Build a snapshot from any reference source
    pub fn from_source(source: &dyn ReferenceSource) -> ModelResult<Self> {
        Ok(Self::from_assumptions(build_baseline(source)?))
    }

    /// Build a snapshot from a workbook export on disk
    pub fn from_workbook_path(path: &Path) -> ModelResult<Self> {
        Self::from_source(&Workbook::load_from(path)?)
    }

    /// Wrap already-built assumptions
    pub fn from_assumptions(assumptions: Assumptions) -> Self {
        Self {
            assumptions: Arc::new(assumptions),
        }
    }

    /// Independent deep copy of the baseline
    pub fn load(&self) -> Assumptions {
        Assumptions::clone(&self.assumptions)
    }

    /// Read-only view for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }
}

static DEFAULT_BASELINE: OnceLock<BaselineSnapshot> = OnceLock::new();

/// Process-wide baseline, built from the default workbook on first use
///
/// The workbook path can be overridden with [`WORKBOOK_PATH_ENV`]. A failed
/// build is returned to the caller and retried on the next call.
pub fn default_baseline() -> ModelResult<&'static BaselineSnapshot> {
    if let Some(snapshot) = DEFAULT_BASELINE.get() {
        return Ok(snapshot);
    }
    let path = std::env::var(WORKBOOK_PATH_ENV).unwrap_or_else(|_| DEFAULT_WORKBOOK_PATH.to_string());
    let snapshot = BaselineSnapshot::from_workbook_path(Path::new(&path))?;
    Ok(DEFAULT_BASELINE.get_or_init(|| snapshot))
}

/// Deep copy of the process-wide baseline assumptions
pub fn load_baseline() -> ModelResult<Assumptions> {
    Ok(default_baseline()?.load())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_are_independent() {
        let first = load_baseline().expect("Failed to load baseline");
        let mut second = load_baseline().unwrap();

        second.purchase_price = 1.0;
        second.unit_mix[0].rent *= 2.0;
        second.operating_expenses.clear();

        let third = load_baseline().unwrap();
        assert_eq!(first, third);
        assert_ne!(second, third);
    }

    #[test]
    fn test_snapshot_load_is_deep() {
        let snapshot = BaselineSnapshot::from_assumptions(Assumptions {
            purchase_price: 500_000.0,
            ..Default::default()
        });
        let mut copy = snapshot.load();
        copy.purchase_price = 0.0;
        assert_eq!(snapshot.assumptions().purchase_price, 500_000.0);
    }
}
