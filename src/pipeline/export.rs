//! CSV export of the full table or a single student's rows

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;

use super::columns::{filter_rows_eq, require_columns, ViewError, NAME};

/// File name of the full-class export
pub const FULL_REPORT_FILE: &str = "All_Students_Report.csv";

/// File name of a single-student export.
///
/// Path separators in the name are replaced with `_` so the file always
/// lands directly inside the export directory.
pub fn student_report_file_name(student: &str) -> String {
    let stem: String = student
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();
    format!("{}_report.csv", stem)
}

/// Write a table as CSV with a header row and no index column.
///
/// Missing parent directories are created. A failed write may leave a
/// partial file behind.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut df = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = df.height(), "Wrote CSV");
    Ok(())
}

/// Export the whole table to `All_Students_Report.csv` in `dir`
pub fn export_all(df: &DataFrame, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(FULL_REPORT_FILE);
    write_csv(df, &path)?;
    Ok(path)
}

/// Export one student's rows to `<student>_report.csv` in `dir`
pub fn export_student(df: &DataFrame, student: &str, dir: &Path) -> Result<PathBuf> {
    require_columns(df, &[NAME])?;

    let rows = filter_rows_eq(df, NAME, student)?;
    if rows.height() == 0 {
        return Err(ViewError::UnknownStudent(student.to_string()).into());
    }

    let path = dir.join(student_report_file_name(student));
    write_csv(&rows, &path)?;
    Ok(path)
}
