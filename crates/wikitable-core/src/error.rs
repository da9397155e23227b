use std::path::PathBuf;

use crate::model::TableId;

#[derive(Debug, thiserror::Error)]
pub enum WikitableError {
    #[error("no name found for {table}: no caption and no preceding headline")]
    Naming { table: TableId },

    #[error("invalid rowspan '{value}' in row {row} of {table}")]
    InvalidRowspan {
        table: TableId,
        row: usize,
        value: String,
    },

    #[error("failed to load options from {path}: {reason}")]
    OptionsLoad { path: PathBuf, reason: String },

    #[error("invalid options: {0}")]
    OptionsInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WikitableError {
    /// Errors that concern a single table and can be skipped when
    /// scraping a whole page in skip-and-continue mode.
    pub fn is_table_error(&self) -> bool {
        matches!(
            self,
            WikitableError::Naming { .. } | WikitableError::InvalidRowspan { .. }
        )
    }
}
