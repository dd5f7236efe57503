//! CSV writer for swept tables.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use polars::prelude::{
    Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, PolarsResult, SerWriter, Series,
};
use tempfile::NamedTempFile;

use slabs_model::OUTPUT_FILE_NAME;

use crate::error::{OutputError, Result};

/// Output location for a given input file: same directory, fixed file name.
pub fn output_path_for(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(OUTPUT_FILE_NAME)
}

/// Writes `df` to `path` as CSV, replacing any existing file.
///
/// The rows go to a temporary file in the destination directory first, which
/// is renamed over `path` only once everything is flushed. Empty strings are
/// written as bare empty fields, the same as nulls.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut out = blank_empty_strings(df).map_err(|e| OutputError::DataFrame {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staged = NamedTempFile::new_in(dir).map_err(write_error)?;
    let mut writer = BufWriter::new(staged);
    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut out)
        .map_err(|e| OutputError::DataFrame {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let staged = writer
        .into_inner()
        .map_err(|e| write_error(e.into_error()))?;
    staged.persist(path).map_err(|e| write_error(e.error))?;

    tracing::debug!(
        path = %path.display(),
        rows = out.height(),
        columns = out.width(),
        "csv written"
    );
    Ok(())
}

/// Copy of `df` with every empty string replaced by null.
fn blank_empty_strings(df: &DataFrame) -> PolarsResult<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(|column| -> PolarsResult<Column> {
            let values: Vec<Option<&str>> = column
                .str()?
                .into_iter()
                .map(|value| value.filter(|text| !text.is_empty()))
                .collect();
            Ok(Series::new(column.name().clone(), values).into_column())
        })
        .collect::<PolarsResult<Vec<Column>>>()?;
    DataFrame::new(columns)
}
