//! Load, sweep, and write stages for one input file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use slabs_ingest::read_table;
use slabs_model::{SheetSelector, SweepOptions, SweepReport};
use slabs_output::{output_path_for, write_csv};
use slabs_transform::sweep;

/// Outcome of a completed run.
#[derive(Debug)]
pub struct SweepRun {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: SweepReport,
}

/// Sweeps `input` and writes the result next to it.
///
/// Any failure aborts before the output file is created.
pub fn run_sweep(
    input: &Path,
    sheet: Option<&SheetSelector>,
    options: &SweepOptions,
) -> Result<SweepRun> {
    let load_span = info_span!("load", path = %input.display());
    let load_start = Instant::now();
    let mut df = load_span
        .in_scope(|| read_table(input, sheet))
        .with_context(|| format!("load {}", input.display()))?;
    info!(
        rows = df.height(),
        columns = df.width(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    let report = info_span!("sweep", reference = %options.reference_column)
        .in_scope(|| sweep(&mut df, options))
        .context("sweep slab columns")?;

    let output = output_path_for(input);
    let write_start = Instant::now();
    info_span!("write", path = %output.display())
        .in_scope(|| write_csv(&df, &output))
        .with_context(|| format!("write {}", output.display()))?;
    info!(
        path = %output.display(),
        duration_ms = write_start.elapsed().as_millis(),
        "write complete"
    );

    Ok(SweepRun {
        input: input.to_path_buf(),
        output,
        report,
    })
}
