//! Shared vocabulary for the slab sweep workspace.
//!
//! The sweep reads an outlet sheet, builds the set of known outlet codes from
//! the reference column, and strips those codes out of each slab column.

pub mod options;
pub mod report;

pub use options::{
    OUTLET_CODE_COLUMN, OUTPUT_FILE_NAME, SLAB_COLUMNS, SheetSelector, SweepOptions,
};
pub use report::{ColumnOutcome, SweepReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_roll_up() {
        let report = SweepReport {
            rows: 3,
            columns: 2,
            reference_codes: 2,
            outcomes: vec![
                ColumnOutcome::new("SKIN_CARE_GAL_GOLD", 3, 1),
                ColumnOutcome::new("HAIR_CARE_GOLD_SLAB", 2, 2),
            ],
            skipped: vec!["SKIN_CARE_PONDS_GOLD".to_string()],
        };
        assert_eq!(report.total_original(), 5);
        assert_eq!(report.total_removed(), 2);
        assert_eq!(report.total_remaining(), 3);
    }

    #[test]
    fn report_serializes() {
        let report = SweepReport {
            rows: 1,
            columns: 1,
            reference_codes: 1,
            outcomes: vec![ColumnOutcome::new("SKIN_CARE_GAL_GOLD", 1, 0)],
            skipped: vec![],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: SweepReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }
}
