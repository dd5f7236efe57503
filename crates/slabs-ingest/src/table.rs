//! Format dispatch and header cleanup.

use std::collections::HashSet;
use std::path::Path;

use polars::prelude::DataFrame;

use slabs_model::SheetSelector;

use crate::csv::read_csv_frame;
use crate::error::{IngestError, Result};
use crate::format::TableFormat;
use crate::missing::{drop_blank_rows, null_missing_tokens};
use crate::workbook::read_workbook_frame;

/// Loads a CSV or workbook file as a string-typed DataFrame.
///
/// The path must exist; the extension picks the reader. `sheet` only applies
/// to workbooks and defaults to the first sheet. Fully blank rows are
/// dropped, missing tokens become nulls, and column names come back trimmed.
pub fn read_table(path: &Path, sheet: Option<&SheetSelector>) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = match TableFormat::from_path(path)? {
        TableFormat::Csv => {
            if let Some(sheet) = sheet {
                tracing::debug!(sheet = %sheet, "sheet selector ignored for CSV input");
            }
            read_csv_frame(path)?
        }
        TableFormat::Workbook => {
            let selector = sheet.cloned().unwrap_or_default();
            read_workbook_frame(path, &selector)?
        }
    };
    let mut df = null_missing_tokens(&drop_blank_rows(df)?)?;
    trim_column_names(&mut df, path)?;
    Ok(df)
}

/// Trims surrounding whitespace from every column name.
pub fn trim_column_names(df: &mut DataFrame, path: &Path) -> Result<()> {
    let trimmed: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.trim().to_string())
        .collect();
    ensure_unique_columns(&trimmed, path)?;
    df.set_column_names(trimmed)?;
    Ok(())
}

pub(crate) fn ensure_unique_columns(names: &[String], path: &Path) -> Result<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(IngestError::DuplicateColumn {
                column: name.clone(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}
