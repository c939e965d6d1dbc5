//! File-backed dispatch tests.

use rps_ingest::{IngestError, TableFormat, detect_id_column, read_table};
use rps_model::Value;
use tempfile::TempDir;

#[test]
fn csv_roundtrip_through_dispatch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cohort.csv");
    std::fs::write(&path, "Patient_ID,age,stage\nP-1,61,Stage II\nP-2,NA,\n").unwrap();

    let (dataset, info) = read_table(&path).unwrap();
    assert_eq!(info.format, TableFormat::Delimited);
    assert_eq!(info.filename, "cohort.csv");
    assert_eq!(info.rows, 2);
    assert_eq!(info.columns, 3);
    assert_eq!(info.sha256.len(), 64);

    assert_eq!(detect_id_column(&dataset.columns), Some("Patient_ID"));
    assert_eq!(dataset.value(0, "age"), &Value::Number(61.0));
    assert_eq!(dataset.value(1, "age"), &Value::Missing);
    assert_eq!(dataset.value(1, "stage"), &Value::Missing);
}

#[test]
fn unsupported_suffix_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cohort.parquet");
    std::fs::write(&path, "ignored").unwrap();

    let error = read_table(&path).unwrap_err();
    assert!(matches!(error, IngestError::UnsupportedFormat { .. }));
    let message = error.to_string();
    assert!(message.contains("cohort.parquet"));
    assert!(message.contains(".csv"));
}

#[test]
fn suffix_match_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cohort.CSV");
    std::fs::write(&path, "id\nP-1\n").unwrap();

    let (dataset, info) = read_table(&path).unwrap();
    assert_eq!(info.format, TableFormat::Delimited);
    assert_eq!(dataset.row_count(), 1);
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    assert!(matches!(
        read_table(&path).unwrap_err(),
        IngestError::Io { .. }
    ));
}
