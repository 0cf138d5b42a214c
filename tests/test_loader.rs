//! Unit tests for dataset loader

use gradelens::pipeline::{load_dataset, load_dataset_with_progress};
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_load_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = common::write_lines(
        temp_dir.path(),
        "grades.csv",
        &["Name,Course Name,Grade", "Alice,LINUX,A", "Bob,JAVA,F"],
    );

    let (df, rows, cols, mem_mb) = load_dataset_with_progress(&csv_path, 100).unwrap();

    assert_eq!(rows, 2, "Should have 2 data rows");
    assert_eq!(cols, 3, "Should have 3 columns");
    assert_eq!(
        common::column_names(&df),
        vec!["Name", "Course Name", "Grade"]
    );
    assert!(mem_mb >= 0.0, "Memory estimate should be non-negative");
}

#[test]
fn test_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("grades.xlsx");
    std::fs::File::create(&bad_path).unwrap();

    let result = load_dataset(&bad_path, 100);

    assert!(result.is_err(), "Unsupported format should return error");
    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("Unsupported"),
        "Error message should mention unsupported format: {}",
        err_msg
    );
}

#[test]
fn test_nonexistent_file() {
    let path = std::path::Path::new("/nonexistent/path/to/grades.csv");

    let result = load_dataset(path, 100);

    assert!(result.is_err(), "Nonexistent file should return error");
}

#[test]
fn test_csv_with_missing_values() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = common::write_lines(
        temp_dir.path(),
        "missing.csv",
        &["Name,Mark,Grade", "Alice,,A", ",55,", "Cara,70,B"],
    );

    let df = load_dataset(&csv_path, 100).unwrap();

    assert_eq!(df.height(), 3);
    let null_counts: Vec<usize> = df.get_columns().iter().map(|c| c.null_count()).collect();
    assert_eq!(null_counts, vec![1, 1, 1]);
}

#[test]
fn test_full_schema_scan() {
    let temp_dir = TempDir::new().unwrap();
    let mut lines = vec!["Mark".to_string()];
    lines.extend((0..50).map(|i| i.to_string()));
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    let csv_path = common::write_lines(temp_dir.path(), "marks.csv", &lines);

    let df_short = load_dataset(&csv_path, 10).unwrap();
    let df_full = load_dataset(&csv_path, 0).unwrap();

    assert_eq!(df_short.height(), 50);
    assert_eq!(df_full.height(), 50);
}
