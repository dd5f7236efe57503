//! Full sweep of a table: reference set, then each target column.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{debug, info};

use slabs_model::{SweepOptions, SweepReport};

use crate::compact::compact_column;
use crate::error::Result;
use crate::normalize::normalize_column_in_place;
use crate::reference::build_reference_set;

/// Sweeps `df` in place according to `options`.
///
/// Fails with `ColumnNotFound` before touching any column if the reference
/// column is absent. The reference column is rewritten in normalized form;
/// absent target columns are recorded in [`SweepReport::skipped`].
pub fn sweep(df: &mut DataFrame, options: &SweepOptions) -> Result<SweepReport> {
    let start = Instant::now();
    let mut report = SweepReport {
        rows: df.height(),
        columns: df.width(),
        ..SweepReport::default()
    };

    let reference = build_reference_set(df, &options.reference_column)?;
    normalize_column_in_place(df, &options.reference_column)?;
    report.reference_codes = reference.len();
    info!(
        column = %options.reference_column,
        unique_codes = reference.len(),
        "reference codes collected"
    );

    for name in &options.target_columns {
        match compact_column(df, name, &reference)? {
            Some(outcome) => {
                info!(
                    column = %outcome.column,
                    original = outcome.original,
                    removed = outcome.removed,
                    remaining = outcome.remaining,
                    "column compacted"
                );
                report.outcomes.push(outcome);
            }
            None => {
                debug!(column = %name, "target column absent, skipped");
                report.skipped.push(name.clone());
            }
        }
    }

    info!(
        columns = report.outcomes.len(),
        skipped = report.skipped.len(),
        removed = report.total_removed(),
        duration_ms = start.elapsed().as_millis(),
        "sweep complete"
    );
    Ok(report)
}
