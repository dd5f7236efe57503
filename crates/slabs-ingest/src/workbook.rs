//! Worksheet loading through calamine.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use slabs_model::SheetSelector;

use crate::cell::cell_text;
use crate::error::{IngestError, Result};
use crate::table::ensure_unique_columns;

/// Resolve a selector against the workbook's sheet names.
pub fn resolve_sheet_name(
    names: &[String],
    selector: &SheetSelector,
    path: &Path,
) -> Result<String> {
    let found = match selector {
        SheetSelector::Index(index) => names.get(*index),
        SheetSelector::Name(name) => names.iter().find(|candidate| *candidate == name),
    };
    found.cloned().ok_or_else(|| IngestError::SheetNotFound {
        sheet: selector.to_string(),
        path: path.to_path_buf(),
    })
}

/// Reads one worksheet into a DataFrame with all columns as `String`.
///
/// The first row of the used range is the header row.
pub fn read_workbook_frame(path: &Path, selector: &SheetSelector) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let sheet = resolve_sheet_name(&workbook.sheet_names(), selector, path)?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let df = range_to_frame(&range, path)?;
    tracing::debug!(
        path = %path.display(),
        sheet = %sheet,
        rows = df.height(),
        columns = df.width(),
        "worksheet loaded"
    );
    Ok(df)
}

fn header_name(cell: Option<&Data>, index: usize) -> String {
    match cell.and_then(cell_text) {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => format!("Unnamed: {index}"),
    }
}

fn range_to_frame(range: &Range<Data>, path: &Path) -> Result<DataFrame> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(DataFrame::empty());
    };
    let width = range.width();
    let headers: Vec<String> = (0..width)
        .map(|idx| header_name(header_row.get(idx), idx))
        .collect();
    ensure_unique_columns(&headers, path)?;

    let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
    for row in rows {
        for (idx, column) in values.iter_mut().enumerate() {
            column.push(row.get(idx).and_then(cell_text));
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(values)
        .map(|(name, cells)| Series::new(name.into(), cells).into_column())
        .collect();
    Ok(DataFrame::new(columns)?)
}
