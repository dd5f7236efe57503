//! Reference set of known outlet codes.

use std::collections::HashSet;

use polars::prelude::DataFrame;

use crate::error::{Result, TransformError};
use crate::normalize::normalize_column;

/// Unique canonical codes taken from the reference column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    codes: HashSet<String>,
}

impl ReferenceSet {
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// True when `code` (already canonical) is a reference code.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Builds the reference set from the named column.
///
/// Missing cells are skipped; everything else is normalized first.
pub fn build_reference_set(df: &DataFrame, column: &str) -> Result<ReferenceSet> {
    let series = df
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let reference: ReferenceSet = normalize_column(series)?.into_iter().flatten().collect();
    tracing::debug!(
        column = %column,
        unique_codes = reference.len(),
        "reference set built"
    );
    Ok(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn collects_unique_normalized_codes() {
        let df = DataFrame::new(vec![
            Series::new(
                "OUTLET CODE".into(),
                &[Some("a1"), Some(" A1 "), None, Some("b\u{a0}2"), Some("")],
            )
            .into_column(),
        ])
        .unwrap();

        let reference = build_reference_set(&df, "OUTLET CODE").unwrap();

        assert_eq!(reference.len(), 3);
        assert!(reference.contains("A1"));
        assert!(reference.contains("B2"));
        assert!(reference.contains(""));
        assert!(!reference.contains("a1"));
    }

    #[test]
    fn missing_reference_column_is_an_error() {
        let df = DataFrame::new(vec![
            Series::new("OUTLET".into(), &[Some("A1")]).into_column(),
        ])
        .unwrap();

        let err = build_reference_set(&df, "OUTLET CODE").unwrap_err();
        assert!(
            matches!(err, TransformError::ColumnNotFound { ref column } if column == "OUTLET CODE")
        );
    }

    #[test]
    fn all_missing_column_gives_empty_set() {
        let df = DataFrame::new(vec![
            Series::new("OUTLET CODE".into(), &[None::<&str>, None]).into_column(),
        ])
        .unwrap();

        let reference = build_reference_set(&df, "OUTLET CODE").unwrap();
        assert!(reference.is_empty());
    }
}
