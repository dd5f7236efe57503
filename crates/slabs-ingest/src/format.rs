//! Input format detection from file extensions.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Workbook extensions accepted by the loader (lowercase, without the dot).
pub const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xltx", "xltm", "xls"];

/// Supported input layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-delimited text with a header row.
    Csv,
    /// Spreadsheet workbook; one sheet is loaded.
    Workbook,
}

impl TableFormat {
    /// Detect the format from the path extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if extension == "csv" {
            return Ok(Self::Csv);
        }
        if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
            return Ok(Self::Workbook);
        }
        let extension = if extension.is_empty() {
            String::new()
        } else {
            format!(".{extension}")
        };
        Err(IngestError::UnsupportedFormat { extension })
    }
}
