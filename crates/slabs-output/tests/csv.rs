//! Tests for CSV output.

use std::fs;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use slabs_output::{OutputError, write_csv};

fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

#[test]
fn writes_nulls_as_empty_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Final Slabs V2.csv");
    let df = test_df(vec![
        ("OUTLET CODE", vec![Some("A1"), Some("B2"), None]),
        ("SKIN_CARE_GAL_GOLD", vec![Some("C3"), None, None]),
    ]);

    write_csv(&df, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(written, @r"
    OUTLET CODE,SKIN_CARE_GAL_GOLD
    A1,C3
    B2,
    ,
    ");
}

#[test]
fn quotes_fields_only_when_needed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let df = test_df(vec![("NAME", vec![Some("a,b"), Some("00123")])]);

    write_csv(&df, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "NAME\n\"a,b\"\n00123\n");
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale contents that are longer than the new output\n").unwrap();
    let df = test_df(vec![("A", vec![Some("1")])]);

    write_csv(&df, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "A\n1\n");
}

#[test]
fn unwritable_destination_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("out.csv");
    let df = test_df(vec![("A", vec![Some("1")])]);

    let err = write_csv(&df, &path).unwrap_err();
    assert!(matches!(err, OutputError::FileWrite { .. }));
}

#[test]
fn empty_strings_are_written_unquoted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let df = test_df(vec![
        ("OUTLET CODE", vec![Some("A1"), Some("B2")]),
        ("SKIN_CARE_GAL_GOLD", vec![Some(""), Some("X")]),
    ]);

    write_csv(&df, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "OUTLET CODE,SKIN_CARE_GAL_GOLD\nA1,\nB2,X\n");
}

#[test]
fn failed_write_leaves_destination_and_directory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    fs::create_dir(&path).unwrap();
    let df = test_df(vec![("A", vec![Some("1")])]);

    let err = write_csv(&df, &path).unwrap_err();

    assert!(matches!(err, OutputError::FileWrite { .. }));
    assert!(path.is_dir());
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn successful_write_leaves_no_staging_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let df = test_df(vec![("A", vec![Some("1")])]);

    write_csv(&df, &path).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["out.csv".to_string()]);
}
