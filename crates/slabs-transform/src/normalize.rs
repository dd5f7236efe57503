//! Outlet code normalization.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

use crate::error::{Result, TransformError};

const NO_BREAK_SPACE: char = '\u{a0}';

/// Canonical form of a raw cell, or `None` when the cell is missing.
///
/// Trims surrounding whitespace, deletes every no-break space (U+00A0) wherever
/// it sits, then uppercases. A value that ends up empty stays `Some("")`.
///
/// # Examples
///
/// ```
/// use slabs_transform::normalize_code;
///
/// assert_eq!(normalize_code(Some(" a\u{a0}b ")), Some("AB".to_string()));
/// assert_eq!(normalize_code(Some("   ")), Some(String::new()));
/// assert_eq!(normalize_code(None), None);
/// ```
pub fn normalize_code(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().replace(NO_BREAK_SPACE, "").to_uppercase())
}

/// Normalizes every cell of a column, keeping row order.
///
/// Non-string columns are cast to text first.
pub fn normalize_column(column: &Column) -> Result<Vec<Option<String>>> {
    let text = column.cast(&DataType::String)?;
    Ok(text.str()?.into_iter().map(normalize_code).collect())
}

/// Replaces a column with its normalized values, same length.
pub fn normalize_column_in_place(df: &mut DataFrame, name: &str) -> Result<()> {
    let column = df
        .column(name)
        .map_err(|_| TransformError::ColumnNotFound {
            column: name.to_string(),
        })?;
    let values = normalize_column(column)?;
    df.with_column(Series::new(name.into(), values).into_column())?;
    Ok(())
}
