//! Per-student categorization and good/poor pairing
//!
//! Each row is classified from its grade, rows are grouped by student name,
//! and a student is Good or Poor when that bucket strictly outnumbers the
//! other. Good and Poor students are then zipped by position; surplus
//! students on the longer side are left unpaired.

use std::collections::BTreeMap;

use polars::prelude::*;
use serde::Serialize;

use super::columns::{require_columns, string_values, ViewError, GRADE, NAME, PERFORMANCE};
use super::grades::{classify_cell, Performance};

/// Per-student counts of Good/Neutral/Poor rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub good: usize,
    pub neutral: usize,
    pub poor: usize,
}

/// One (poor performer, good performer) association
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    pub poor: String,
    pub good: String,
}

/// Result of the pairing view
#[derive(Debug, Clone, Default)]
pub struct Pairing {
    pub summaries: Vec<StudentSummary>,
    pub pairs: Vec<Pair>,
}

impl StudentSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, performance: Performance) {
        match performance {
            Performance::Good => self.good += 1,
            Performance::Neutral => self.neutral += 1,
            Performance::Poor => self.poor += 1,
        }
    }

    /// Majority of Good over Poor rows; ties (including zero counts) are Neutral
    pub fn category(&self) -> Performance {
        use std::cmp::Ordering;
        match self.good.cmp(&self.poor) {
            Ordering::Greater => Performance::Good,
            Ordering::Less => Performance::Poor,
            Ordering::Equal => Performance::Neutral,
        }
    }
}

impl Pairing {
    pub fn count(&self, category: Performance) -> usize {
        self.summaries
            .iter()
            .filter(|s| s.category() == category)
            .count()
    }

    /// Good or Poor students that did not get a partner
    pub fn unpaired(&self) -> usize {
        self.count(Performance::Good) + self.count(Performance::Poor) - 2 * self.pairs.len()
    }
}

/// Return a copy of the table with a `Performance` column derived from `Grade`.
///
/// The input table is left untouched.
pub fn with_performance(df: &DataFrame) -> Result<DataFrame, ViewError> {
    require_columns(df, &[GRADE])?;

    let performance: Vec<String> = string_values(df, GRADE)?
        .iter()
        .map(|grade| classify_cell(grade.as_deref()).to_string())
        .collect();

    let mut out = df.clone();
    out.with_column(Column::new(PERFORMANCE.into(), performance))?;
    tracing::debug!(rows = out.height(), "Derived performance column");
    Ok(out)
}

/// Group rows by student name and count performance buckets.
///
/// Students come back sorted by name; rows with a null name are skipped.
pub fn summarize_students(df: &DataFrame) -> Result<Vec<StudentSummary>, ViewError> {
    require_columns(df, &[NAME, GRADE])?;

    let names = string_values(df, NAME)?;
    let grades = string_values(df, GRADE)?;

    let mut groups: BTreeMap<String, StudentSummary> = BTreeMap::new();
    for (name, grade) in names.into_iter().zip(grades) {
        let Some(name) = name else { continue };
        groups
            .entry(name.clone())
            .or_insert_with(|| StudentSummary::new(name))
            .record(classify_cell(grade.as_deref()));
    }

    Ok(groups.into_values().collect())
}

/// Zip Poor and Good students by position.
///
/// Output length is `min(|good|, |poor|)`; surplus students are dropped.
pub fn pair_students(summaries: &[StudentSummary]) -> Vec<Pair> {
    let names_in = |category: Performance| {
        summaries
            .iter()
            .filter(move |s| s.category() == category)
            .map(|s| s.name.clone())
    };

    names_in(Performance::Poor)
        .zip(names_in(Performance::Good))
        .map(|(poor, good)| Pair { poor, good })
        .collect()
}

/// Categorize every student and build the collaboration pairs
pub fn pair_performers(df: &DataFrame) -> Result<Pairing, ViewError> {
    let summaries = summarize_students(df)?;
    let pairs = pair_students(&summaries);
    tracing::info!(
        students = summaries.len(),
        pairs = pairs.len(),
        "Paired students"
    );
    Ok(Pairing { summaries, pairs })
}
