//! Error types for reference loading and baseline construction

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing reference cell for {field}: {sheet}!{cell}")]
    MissingCell {
        field: String,
        sheet: String,
        cell: String,
    },

    #[error("Reference cell for {field} is not numeric: {sheet}!{cell} = {found:?}")]
    NotNumeric {
        field: String,
        sheet: String,
        cell: String,
        found: String,
    },

    #[error("Unknown cell kind '{kind}' at {sheet}!{cell}")]
    UnknownCellKind {
        sheet: String,
        cell: String,
        kind: String,
    },
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
