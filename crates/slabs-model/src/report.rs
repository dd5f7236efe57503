//! Per-column and per-run sweep results.

use serde::{Deserialize, Serialize};

/// Counts for one swept column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOutcome {
    pub column: String,
    /// Present (non-missing) values before filtering.
    pub original: usize,
    /// Values dropped because they matched a reference code.
    pub removed: usize,
    /// Values kept and shifted to the top of the column.
    pub remaining: usize,
}

impl ColumnOutcome {
    pub fn new(column: impl Into<String>, original: usize, remaining: usize) -> Self {
        Self {
            column: column.into(),
            original,
            removed: original.saturating_sub(remaining),
            remaining,
        }
    }
}

/// Summary of a full sweep over one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    pub rows: usize,
    pub columns: usize,
    /// Unique normalized codes in the reference column.
    pub reference_codes: usize,
    pub outcomes: Vec<ColumnOutcome>,
    /// Target columns not present in the table.
    pub skipped: Vec<String>,
}

impl SweepReport {
    pub fn total_original(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.original).sum()
    }

    pub fn total_removed(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.removed).sum()
    }

    pub fn total_remaining(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.remaining).sum()
    }
}
