//! Column names, required-column checks and view error types

use std::collections::HashSet;

use polars::prelude::*;
use thiserror::Error;

pub const SL_NO: &str = "Sl. No.";
pub const NAME: &str = "Name";
pub const MAIL: &str = "MAIL";
pub const COURSE_NAME: &str = "Course Name";
pub const COURSE_ID: &str = "Course ID";
pub const ATTEMPT_ID: &str = "Attempt ID";
pub const MARK: &str = "Mark";
pub const GRADE: &str = "Grade";
pub const PERFORMANCE: &str = "Performance";
pub const COURSE_RECOMMENDATION: &str = "Course Recommendation";

/// Conditions that stop a view from rendering.
///
/// Everything except `Polars` is reported to the user as an inline warning.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Please upload data first!")]
    NoData,

    #[error("Required columns ({}) not found in the dataset!", .expected.join(", "))]
    MissingColumns { expected: Vec<String> },

    #[error("Student '{0}' not found in the dataset!")]
    UnknownStudent(String),

    #[error("Course '{0}' not found in the dataset!")]
    UnknownCourse(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl ViewError {
    /// True for conditions that should be shown as a warning rather than fail the run
    pub fn is_warning(&self) -> bool {
        !matches!(self, ViewError::Polars(_))
    }
}

/// Check whether a column exists in the table
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Ensure every required column is present.
///
/// The error lists all expected columns, not only the missing ones.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), ViewError> {
    if required.iter().all(|name| has_column(df, name)) {
        Ok(())
    } else {
        Err(ViewError::MissingColumns {
            expected: required.iter().map(|s| s.to_string()).collect(),
        })
    }
}

/// Read a column as optional strings, casting non-string columns
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, ViewError> {
    let column = df.column(name)?;
    let cast = column.cast(&DataType::String)?;
    let values = cast
        .str()?
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect();
    Ok(values)
}

/// Distinct non-null values of a column in first-seen order
pub fn unique_values(df: &DataFrame, name: &str) -> Result<Vec<String>, ViewError> {
    let mut seen = HashSet::new();
    let values = string_values(df, name)?
        .into_iter()
        .flatten()
        .filter(|v| seen.insert(v.clone()))
        .collect();
    Ok(values)
}

/// Rows where `column` equals `value` exactly
pub fn filter_rows_eq(df: &DataFrame, column: &str, value: &str) -> Result<DataFrame, ViewError> {
    let mask: BooleanChunked = string_values(df, column)?
        .iter()
        .map(|v| v.as_deref() == Some(value))
        .collect();
    Ok(df.filter(&mask)?)
}
