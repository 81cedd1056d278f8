//! Reference data source: cell values keyed by (sheet, cell) coordinates
//!
//! The baseline model is derived from a pre-built spreadsheet. The engine never
//! touches the spreadsheet format itself; it reads values through the
//! [`ReferenceSource`] trait, and the bundled [`Workbook`] serves them from a CSV
//! export of the workbook cells.

pub mod cells;
mod workbook;

pub use cells::CellRef;
pub use workbook::{Workbook, DEFAULT_WORKBOOK_PATH};

use crate::error::{ModelError, ModelResult};

/// A single cell value as exported from the workbook
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Numeric view of the cell. Text is accepted when it parses as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(text) => text.trim().parse().ok(),
            CellValue::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text view of the cell; numbers are rendered the way a label would show them
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(text) => Some(text.clone()),
            CellValue::Number(value) if value.fract() == 0.0 => Some(format!("{}", *value as i64)),
            CellValue::Number(value) => Some(value.to_string()),
            CellValue::Empty => None,
        }
    }
}

/// Read-only tabular data keyed by sheet name and cell reference
pub trait ReferenceSource {
    /// Value at `sheet!cell`, or [`CellValue::Empty`] when nothing is stored there
    fn read(&self, sheet: &str, cell: &str) -> CellValue;

    fn read_ref(&self, at: CellRef) -> CellValue {
        self.read(at.sheet, at.cell)
    }
}

/// Read a required numeric cell
pub fn require_number(source: &dyn ReferenceSource, field: &str, at: CellRef) -> ModelResult<f64> {
    let value = source.read_ref(at);
    if value.is_empty() {
        return Err(missing(field, at));
    }
    value.as_number().ok_or_else(|| not_numeric(field, at, &value))
}

/// Read an optional numeric cell; an empty cell reads as zero
pub fn optional_number(source: &dyn ReferenceSource, field: &str, at: CellRef) -> ModelResult<f64> {
    let value = source.read_ref(at);
    if value.is_empty() {
        return Ok(0.0);
    }
    value.as_number().ok_or_else(|| not_numeric(field, at, &value))
}

/// Read a required label cell
pub fn require_text(source: &dyn ReferenceSource, field: &str, at: CellRef) -> ModelResult<String> {
    source.read_ref(at).as_text().ok_or_else(|| missing(field, at))
}

fn missing(field: &str, at: CellRef) -> ModelError {
    ModelError::MissingCell {
        field: field.to_string(),
        sheet: at.sheet.to_string(),
        cell: at.cell.to_string(),
    }
}

fn not_numeric(field: &str, at: CellRef, found: &CellValue) -> ModelError {
    ModelError::NotNumeric {
        field: field.to_string(),
        sheet: at.sheet.to_string(),
        cell: at.cell.to_string(),
        found: found.as_text().unwrap_or_default(),
    }
}
