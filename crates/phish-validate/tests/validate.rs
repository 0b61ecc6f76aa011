//! Integration tests for raw batch file validation.

use std::fs;
use std::path::Path;

use phish_model::{ColumnName, ColumnRole, DatasetSchema, RunId, RunLayout};
use phish_validate::{DataValidation, ValidationError};

fn schema() -> DatasetSchema {
    DatasetSchema {
        file_prefix: "phising".to_string(),
        date_stamp_length: 8,
        time_stamp_length: 6,
        column_names: vec!["A".to_string(), "B".to_string(), "Result".to_string()],
        number_of_columns: 3,
    }
}

fn layout(root: &Path) -> RunLayout {
    RunLayout::new(root, &RunId::new("test_run").unwrap())
}

fn write_raw(dir: &Path, name: &str, body: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn partitions_files_into_valid_and_invalid() {
    let artifacts = tempfile::tempdir().unwrap();
    let layout = layout(artifacts.path());
    let raw_dir = layout.data_ingestion_dir();
    write_raw(&raw_dir, "phising_08012022_120000.csv", "A,B,Result\n1,x,-1\n2,y,1\n");
    // Wrong column count.
    write_raw(&raw_dir, "phising_08022022_120000.csv", "A,Result\n1,-1\n");
    // Bad filename.
    write_raw(&raw_dir, "export.csv", "A,B,Result\n1,x,-1\n");

    let outcome = DataValidation::new(&raw_dir, &layout, schema())
        .run()
        .unwrap();

    assert_eq!(outcome.valid_count, 1);
    assert_eq!(outcome.invalid_count, 2);
    assert!(outcome.valid_dir.join("phising_08012022_120000.csv").is_file());
    assert!(layout.invalid_data_dir().join("phising_08022022_120000.csv").is_file());
    assert!(layout.invalid_data_dir().join("export.csv").is_file());
    // Raw dir has been emptied by the moves.
    assert_eq!(fs::read_dir(&raw_dir).unwrap().count(), 0);
}

#[test]
fn rejects_file_with_fully_missing_column() {
    let artifacts = tempfile::tempdir().unwrap();
    let layout = layout(artifacts.path());
    let raw_dir = layout.data_ingestion_dir();
    write_raw(&raw_dir, "phising_08012022_120000.csv", "A,B,Result\n1,,-1\n2,,1\n");
    write_raw(&raw_dir, "phising_08022022_120000.csv", "A,B,Result\n1,x,-1\n");

    let outcome = DataValidation::new(&raw_dir, &layout, schema())
        .run()
        .unwrap();
    assert_eq!(outcome.valid_count, 1);
    assert_eq!(outcome.invalid_count, 1);
}

#[test]
fn zero_valid_files_is_an_error() {
    let artifacts = tempfile::tempdir().unwrap();
    let layout = layout(artifacts.path());
    let raw_dir = layout.data_ingestion_dir();
    write_raw(&raw_dir, "wrong_name.csv", "A,B,Result\n1,x,-1\n");

    let err = DataValidation::new(&raw_dir, &layout, schema())
        .run()
        .unwrap_err();
    assert!(matches!(err, ValidationError::NoValidFiles));
}

#[test]
fn writes_column_roles_for_valid_data() {
    let artifacts = tempfile::tempdir().unwrap();
    let layout = layout(artifacts.path());
    let raw_dir = layout.data_ingestion_dir();
    write_raw(
        &raw_dir,
        "phising_08012022_120000.csv",
        "A,B,Result\n1,x,-1\n2,y,1\n3,z,1\n",
    );

    let outcome = DataValidation::new(&raw_dir, &layout, schema())
        .run()
        .unwrap();

    let b = ColumnName::new("B").unwrap();
    assert_eq!(outcome.column_roles[&b], ColumnRole::Categorical);
    assert!(layout.column_roles_path().is_file());
    let body = fs::read_to_string(layout.column_roles_path()).unwrap();
    assert!(body.contains("Result"));
}
