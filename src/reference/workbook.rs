//! In-memory workbook loaded from a cell-level CSV export
//!
//! Export format (one row per populated cell):
//!
//! ```text
//! sheet,cell,kind,value
//! UofA,C4,Number,2850000
//! UofA,B12,Text,3 Bedroom Upper
//! ```

use super::{CellValue, ReferenceSource};
use crate::error::{ModelError, ModelResult};
use csv::Reader;
use std::collections::HashMap;
use std::path::Path;

/// Default path to the bundled workbook export
pub const DEFAULT_WORKBOOK_PATH: &str = "data/reference/8plex_model.csv";

/// Raw CSV row of the workbook export
#[derive(Debug, serde::Deserialize)]
struct CellRow {
    sheet: String,
    cell: String,
    kind: String,
    #[serde(default)]
    value: String,
}

impl CellRow {
    fn to_value(&self) -> ModelResult<CellValue> {
        match self.kind.as_str() {
            "Number" => self
                .value
                .trim()
                .parse()
                .map(CellValue::Number)
                .map_err(|_| ModelError::NotNumeric {
                    field: "workbook export".to_string(),
                    sheet: self.sheet.clone(),
                    cell: self.cell.clone(),
                    found: self.value.clone(),
                }),
            "Text" => Ok(CellValue::Text(self.value.clone())),
            "Empty" => Ok(CellValue::Empty),
            other => Err(ModelError::UnknownCellKind {
                sheet: self.sheet.clone(),
                cell: self.cell.clone(),
                kind: other.to_string(),
            }),
        }
    }
}

/// Cell table keyed by (sheet, cell). Cell references are stored upper-case.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    cells: HashMap<(String, String), CellValue>,
}

impl Workbook {
    /// Load the default export
    pub fn load_default() -> ModelResult<Self> {
        Self::load_from(Path::new(DEFAULT_WORKBOOK_PATH))
    }

    /// Load an export from a specific file
    pub fn load_from(path: &Path) -> ModelResult<Self> {
        let reader = Reader::from_path(path)?;
        let workbook = Self::from_csv_reader(reader)?;
        log::debug!("Loaded {} cells from {}", workbook.len(), path.display());
        Ok(workbook)
    }

    /// Load an export from any reader (e.g., an embedded string)
    pub fn from_reader<R: std::io::Read>(reader: R) -> ModelResult<Self> {
        Self::from_csv_reader(Reader::from_reader(reader))
    }

    fn from_csv_reader<R: std::io::Read>(mut reader: Reader<R>) -> ModelResult<Self> {
        let mut workbook = Self::default();
        for result in reader.deserialize() {
            let row: CellRow = result?;
            let value = row.to_value()?;
            workbook.insert(&row.sheet, &row.cell, value);
        }
        Ok(workbook)
    }

    pub fn insert(&mut self, sheet: &str, cell: &str, value: CellValue) {
        self.cells
            .insert((sheet.to_string(), cell.to_ascii_uppercase()), value);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl ReferenceSource for Workbook {
    fn read(&self, sheet: &str, cell: &str) -> CellValue {
        self.cells
            .get(&(sheet.to_string(), cell.to_ascii_uppercase()))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }
}
