//! Filter-and-compact of a single target column.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use tracing::trace;

use slabs_model::ColumnOutcome;

use crate::error::Result;
use crate::normalize::{normalize_code, normalize_column};
use crate::reference::ReferenceSet;

/// Drops reference codes from `values` and shifts the survivors up.
///
/// Values are normalized, missing cells are discarded, and every code found in
/// `reference` is removed without reordering the rest. The returned column is
/// `height` long: survivors first, then `None` padding.
pub fn compact_values<'a, I>(
    column: &str,
    values: I,
    reference: &ReferenceSet,
    height: usize,
) -> (Vec<Option<String>>, ColumnOutcome)
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let present: Vec<String> = values.into_iter().filter_map(normalize_code).collect();
    compact_present(column, present, reference, height)
}

fn compact_present(
    column: &str,
    present: Vec<String>,
    reference: &ReferenceSet,
    height: usize,
) -> (Vec<Option<String>>, ColumnOutcome) {
    let original = present.len();
    let mut compacted: Vec<Option<String>> = Vec::with_capacity(height.max(original));
    for code in present {
        if reference.contains(&code) {
            trace!(column = %column, code = %code, "removed reference code");
        } else {
            compacted.push(Some(code));
        }
    }
    let outcome = ColumnOutcome::new(column, original, compacted.len());
    if compacted.len() < height {
        compacted.resize(height, None);
    }
    (compacted, outcome)
}

/// Compacts the named column of `df` in place.
///
/// Returns `Ok(None)` when the column is not in the frame.
pub fn compact_column(
    df: &mut DataFrame,
    name: &str,
    reference: &ReferenceSet,
) -> Result<Option<ColumnOutcome>> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };
    let present: Vec<String> = normalize_column(column)?.into_iter().flatten().collect();
    let (values, outcome) = compact_present(name, present, reference, df.height());
    df.with_column(Series::new(name.into(), values).into_column())?;
    Ok(Some(outcome))
}
