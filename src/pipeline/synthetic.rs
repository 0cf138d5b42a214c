//! Synthetic grade dataset generation from a student roster
//!
//! Every roster row expands into one row per course with a random mark.
//! Attempt and grade are derived from the mark with fixed thresholds. The
//! generator's grade scale stops at D and never assigns F.

use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::Result;
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::columns::{
    string_values, ATTEMPT_ID, COURSE_ID, COURSE_NAME, GRADE, MAIL, MARK, NAME, SL_NO,
};
use super::export::write_csv;
use super::grades::Grade;
use super::loader::{load_dataset, DEFAULT_INFER_SCHEMA_LENGTH};

/// Courses every student is enrolled in, in Course ID order
pub const COURSES: [&str; 5] = ["LINUX", "PYTHON", "MACHINE LEARNING", "JAVA", "DATABASE"];

/// Course ID of the first entry in [`COURSES`]
pub const FIRST_COURSE_ID: i64 = 101;

/// Marks are drawn uniformly from this half-open range
pub const MARK_RANGE: Range<i64> = 30..100;

/// Roster columns carried into every expanded row
pub const ROSTER_COLUMNS: [&str; 3] = [SL_NO, NAME, MAIL];

/// Output of a generator run
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    Written { path: PathBuf, rows: usize },
    /// The roster was empty or unreadable; nothing was written
    Skipped,
}

pub fn grade_for_mark(mark: i64) -> Grade {
    match mark {
        m if m >= 85 => Grade::A,
        m if m >= 70 => Grade::B,
        m if m >= 50 => Grade::C,
        _ => Grade::D,
    }
}

pub fn attempt_for_mark(mark: i64) -> i64 {
    match mark {
        m if m >= 85 => 1,
        m if m >= 75 => 2,
        m if m >= 50 => 3,
        _ => 4,
    }
}

/// Strip surrounding whitespace from every column name
pub fn normalize_column_names(df: &DataFrame) -> Result<DataFrame> {
    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .map(|c| c.clone().with_name(c.name().trim().into()))
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Expand each roster row into one row per course.
///
/// Output columns: `Sl. No., Name, MAIL, Course Name, Course ID, Attempt ID, Mark, Grade`.
pub fn expand_roster<R: Rng>(roster: &DataFrame, rng: &mut R) -> Result<DataFrame> {
    let roster = normalize_column_names(roster)?;
    for column in ROSTER_COLUMNS {
        if roster.column(column).is_err() {
            anyhow::bail!("Roster column '{}' not found", column);
        }
    }

    let sl_nos = string_values(&roster, SL_NO)?;
    let names = string_values(&roster, NAME)?;
    let mails = string_values(&roster, MAIL)?;

    let capacity = roster.height() * COURSES.len();
    let mut out_sl_no = Vec::with_capacity(capacity);
    let mut out_name = Vec::with_capacity(capacity);
    let mut out_mail = Vec::with_capacity(capacity);
    let mut out_course = Vec::with_capacity(capacity);
    let mut out_course_id = Vec::with_capacity(capacity);
    let mut out_attempt = Vec::with_capacity(capacity);
    let mut out_mark = Vec::with_capacity(capacity);
    let mut out_grade = Vec::with_capacity(capacity);

    for ((sl_no, name), mail) in sl_nos.iter().zip(&names).zip(&mails) {
        for (offset, course) in COURSES.iter().enumerate() {
            let mark = rng.gen_range(MARK_RANGE);

            out_sl_no.push(sl_no.clone());
            out_name.push(name.clone());
            out_mail.push(mail.clone());
            out_course.push(course.to_string());
            out_course_id.push(FIRST_COURSE_ID + offset as i64);
            out_attempt.push(attempt_for_mark(mark));
            out_mark.push(mark);
            out_grade.push(grade_for_mark(mark).to_string());
        }
    }

    let df = DataFrame::new(vec![
        Column::new(SL_NO.into(), out_sl_no),
        Column::new(NAME.into(), out_name),
        Column::new(MAIL.into(), out_mail),
        Column::new(COURSE_NAME.into(), out_course),
        Column::new(COURSE_ID.into(), out_course_id),
        Column::new(ATTEMPT_ID.into(), out_attempt),
        Column::new(MARK.into(), out_mark),
        Column::new(GRADE.into(), out_grade),
    ])?;

    Ok(df)
}

/// Load a roster, treating any read failure as an empty table
pub fn load_roster(path: &Path) -> DataFrame {
    match load_dataset(path, DEFAULT_INFER_SCHEMA_LENGTH) {
        Ok(df) => df,
        Err(err) => {
            tracing::error!(path = %path.display(), error = %format!("{err:#}"), "Error loading roster");
            DataFrame::empty()
        }
    }
}

/// Expand the roster at `input` and write the result to `output`.
///
/// An empty or unreadable roster short-circuits without creating `output`.
pub fn generate(input: &Path, output: &Path, seed: Option<u64>) -> Result<GenerateOutcome> {
    let roster = load_roster(input);
    if roster.height() == 0 || roster.width() == 0 {
        tracing::warn!(path = %input.display(), "Roster is empty, nothing generated");
        return Ok(GenerateOutcome::Skipped);
    }

    let expanded = match seed {
        Some(seed) => expand_roster(&roster, &mut StdRng::seed_from_u64(seed))?,
        None => expand_roster(&roster, &mut rand::thread_rng())?,
    };

    write_csv(&expanded, output)?;
    Ok(GenerateOutcome::Written {
        path: output.to_path_buf(),
        rows: expanded.height(),
    })
}
