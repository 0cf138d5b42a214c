//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small grade sheet with known characteristics
///
/// - Alice: A, B, C -> Good
/// - Bob: F, D, B -> Poor
/// - Cara: C, C, C -> Neutral
/// - Dan: A, D -> Neutral (tie)
/// - Eve: D, D, A -> Poor
pub fn create_grades_dataframe() -> DataFrame {
    df! {
        "Sl. No." => [1i64, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 5, 5, 5],
        "Name" => ["Alice", "Alice", "Alice", "Bob", "Bob", "Bob", "Cara", "Cara", "Cara",
                   "Dan", "Dan", "Eve", "Eve", "Eve"],
        "MAIL" => ["alice@uni.edu", "alice@uni.edu", "alice@uni.edu", "bob@uni.edu", "bob@uni.edu",
                   "bob@uni.edu", "cara@uni.edu", "cara@uni.edu", "cara@uni.edu", "dan@uni.edu",
                   "dan@uni.edu", "eve@uni.edu", "eve@uni.edu", "eve@uni.edu"],
        "Course Name" => ["LINUX", "PYTHON", "JAVA", "LINUX", "PYTHON", "JAVA", "LINUX", "PYTHON",
                          "JAVA", "LINUX", "DATABASE", "LINUX", "PYTHON", "COBOL"],
        "Course ID" => [101i64, 102, 104, 101, 102, 104, 101, 102, 104, 101, 105, 101, 102, 199],
        "Attempt ID" => [1i64, 2, 3, 4, 4, 2, 3, 3, 3, 1, 4, 4, 4, 1],
        "Mark" => [92i64, 78, 60, 20, 45, 72, 55, 58, 61, 88, 40, 35, 42, 95],
        "Grade" => ["A", "B", "C", "F", "D", "B", "C", "C", "C", "A", "D", "D", "D", "A"],
    }
    .unwrap()
}

/// The two-row scenario: Alice with an A, Bob with an F
pub fn create_alice_bob_dataframe() -> DataFrame {
    df! {
        "Name" => ["Alice", "Bob"],
        "Course Name" => ["PYTHON", "PYTHON"],
        "Grade" => ["A", "F"],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("grades.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Write raw lines to a file inside `dir`
pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(rows, expected_rows, "Row count mismatch: expected {}, got {}", expected_rows, rows);
    assert_eq!(cols, expected_cols, "Column count mismatch: expected {}, got {}", expected_cols, cols);
}

/// Column names of a DataFrame as owned strings
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|s| s.to_string()).collect()
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols = column_names(df);
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Assert that a DataFrame does NOT contain specific columns
pub fn assert_missing_columns(df: &DataFrame, unexpected_cols: &[&str]) {
    let actual_cols = column_names(df);
    for col in unexpected_cols {
        assert!(
            !actual_cols.contains(&col.to_string()),
            "Unexpected column still present: '{}'",
            col
        );
    }
}
