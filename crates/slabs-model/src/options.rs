//! Configuration options for the slab sweep.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column holding the master list of outlet codes.
pub const OUTLET_CODE_COLUMN: &str = "OUTLET CODE";

/// Slab columns swept against the outlet codes, in processing order.
pub const SLAB_COLUMNS: [&str; 6] = [
    "SKIN_CARE_GAL_GOLD",
    "SKIN_CARE_PONDS_GOLD",
    "HAIR_CARE_GOLD_SLAB",
    "SKIN_CARE_GAL_DIAMOND",
    "SKIN_CARE_PONDS_DIAMOND",
    "HAIR_CARE_DIAMOND_SLAB",
];

/// File name of the sweep output, written next to the input file.
pub const OUTPUT_FILE_NAME: &str = "Final Slabs V2.csv";

/// Which columns take part in a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepOptions {
    /// Column whose normalized values form the reference set.
    pub reference_column: String,
    /// Columns filtered against the reference set. Absent ones are skipped.
    pub target_columns: Vec<String>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            reference_column: OUTLET_CODE_COLUMN.to_string(),
            target_columns: SLAB_COLUMNS.iter().map(|name| (*name).to_string()).collect(),
        }
    }
}

impl SweepOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reference_column(mut self, name: impl Into<String>) -> Self {
        self.reference_column = name.into();
        self
    }

    #[must_use]
    pub fn with_target_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_columns = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Worksheet to load from a workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetSelector {
    /// Zero-based sheet position.
    Index(usize),
    /// Sheet name as shown in the workbook.
    Name(String),
}

impl SheetSelector {
    /// Parse a `--sheet` value: all digits means an index, anything else a name.
    ///
    /// Digit strings too large for `usize` fall back to a name lookup.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<usize>() {
            Ok(index) if raw.chars().all(|ch| ch.is_ascii_digit()) => Self::Index(index),
            _ => Self::Name(raw.to_string()),
        }
    }
}

impl Default for SheetSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_outlet_and_slab_columns() {
        let options = SweepOptions::default();
        assert_eq!(options.reference_column, "OUTLET CODE");
        assert_eq!(options.target_columns.len(), 6);
        assert_eq!(options.target_columns[0], "SKIN_CARE_GAL_GOLD");
        assert_eq!(options.target_columns[5], "HAIR_CARE_DIAMOND_SLAB");
    }

    #[test]
    fn builders_replace_columns() {
        let options = SweepOptions::new()
            .with_reference_column("REF")
            .with_target_columns(["A", "B"]);
        assert_eq!(options.reference_column, "REF");
        assert_eq!(options.target_columns, vec!["A", "B"]);
    }

    #[test]
    fn sheet_selector_parses_digits_as_index() {
        assert_eq!(SheetSelector::parse("0"), SheetSelector::Index(0));
        assert_eq!(SheetSelector::parse("12"), SheetSelector::Index(12));
        assert_eq!(
            SheetSelector::parse("Sheet1"),
            SheetSelector::Name("Sheet1".to_string())
        );
        assert_eq!(
            SheetSelector::parse("-1"),
            SheetSelector::Name("-1".to_string())
        );
        assert_eq!(SheetSelector::parse(""), SheetSelector::Name(String::new()));
    }

    #[test]
    fn sheet_selector_display() {
        assert_eq!(SheetSelector::Index(2).to_string(), "#2");
        assert_eq!(SheetSelector::Name("Data".to_string()).to_string(), "Data");
    }
}
