//! Property tests for normalization and compaction.

use proptest::prelude::*;

use slabs_transform::{ReferenceSet, compact_values, normalize_code};

fn raw_code() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \u{a0}\ta-cA-C0-2]{0,6}").unwrap()
}

fn raw_column() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of(raw_code()), 0..24)
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in raw_code()) {
        let once = normalize_code(Some(&raw)).unwrap();
        let twice = normalize_code(Some(&once)).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_codes_have_no_no_break_space(raw in raw_code()) {
        let code = normalize_code(Some(&raw)).unwrap();
        let no_break_space = '\u{a0}';
        prop_assert!(!code.contains(no_break_space));
        prop_assert_eq!(code.trim(), code.as_str());
    }

    #[test]
    fn normalization_ignores_case(raw in raw_code()) {
        prop_assert_eq!(
            normalize_code(Some(&raw.to_lowercase())),
            normalize_code(Some(&raw.to_uppercase()))
        );
    }

    #[test]
    fn removed_plus_remaining_is_original(
        column in raw_column(),
        reference in prop::collection::vec(raw_code(), 0..6),
    ) {
        let reference: ReferenceSet = reference
            .iter()
            .filter_map(|code| normalize_code(Some(code)))
            .collect();
        let height = column.len();
        let (values, outcome) = compact_values(
            "SLAB",
            column.iter().map(|value| value.as_deref()),
            &reference,
            height,
        );

        prop_assert_eq!(outcome.original, column.iter().flatten().count());
        prop_assert_eq!(outcome.removed + outcome.remaining, outcome.original);
        prop_assert_eq!(values.len(), height);
        prop_assert!(values[..outcome.remaining].iter().all(Option::is_some));
        prop_assert!(values[outcome.remaining..].iter().all(Option::is_none));
        for code in values.iter().flatten() {
            prop_assert!(!reference.contains(code));
        }
    }

    #[test]
    fn survivors_keep_relative_order(column in raw_column()) {
        let reference: ReferenceSet = ["A", "B0"].into_iter().collect();
        let expected: Vec<String> = column
            .iter()
            .filter_map(|value| normalize_code(value.as_deref()))
            .filter(|code| !reference.contains(code))
            .collect();
        let (values, _) = compact_values(
            "SLAB",
            column.iter().map(|value| value.as_deref()),
            &reference,
            column.len(),
        );
        let survivors: Vec<String> = values.into_iter().flatten().collect();
        prop_assert_eq!(survivors, expected);
    }
}
