//! Static course recommendations for poorly performing rows

use polars::prelude::*;
use serde::Serialize;

use super::columns::{
    has_column, require_columns, string_values, ViewError, COURSE_NAME, COURSE_RECOMMENDATION,
    GRADE, NAME, PERFORMANCE,
};
use super::grades::Performance;
use super::pairing::with_performance;

/// Returned for course names missing from the table
pub const NO_RECOMMENDATIONS: &str = "No recommendations available";

/// Separator used when recommendations are stored in a single table cell
pub const RECOMMENDATION_SEPARATOR: &str = "; ";

static RECOMMENDATIONS: [(&str, [&str; 2]); 5] = [
    (
        "LINUX",
        [
            "Linux Command Line Basics (Udemy, Coursera)",
            "Advanced Linux Shell Scripting (Coursera)",
        ],
    ),
    (
        "PYTHON",
        [
            "Python for Beginners (Udemy, Codecademy)",
            "Deep Learning with Python (Coursera)",
        ],
    ),
    (
        "MACHINE LEARNING",
        [
            "Machine Learning by Andrew Ng (Coursera)",
            "Deep Learning Specialization (Coursera)",
        ],
    ),
    (
        "JAVA",
        [
            "Java Programming for Beginners (Udemy, Coursera)",
            "Advanced Java (Coursera)",
        ],
    ),
    (
        "DATABASE",
        [
            "SQL for Data Science (Coursera, DataCamp)",
            "The Complete SQL Bootcamp (Udemy)",
        ],
    ),
];

/// A Poor row and what to study next
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRow {
    pub name: String,
    pub course: String,
    pub recommendations: Vec<&'static str>,
}

/// Look up suggestions for a course. Never empty.
pub fn recommend(course: &str) -> Vec<&'static str> {
    RECOMMENDATIONS
        .iter()
        .find(|(name, _)| *name == course)
        .map(|(_, recs)| recs.to_vec())
        .unwrap_or_else(|| vec![NO_RECOMMENDATIONS])
}

/// Return a copy of the table with `Course Recommendation` filled for Poor rows.
///
/// Rows with any other performance get a null cell. When the table has no
/// `Performance` column it is derived from `Grade` first.
pub fn with_recommendations(df: &DataFrame) -> Result<DataFrame, ViewError> {
    let mut out = ensure_performance(df)?;

    let performance = string_values(&out, PERFORMANCE)?;
    let courses = string_values(&out, COURSE_NAME)?;

    let recommendations: Vec<Option<String>> = performance
        .iter()
        .zip(&courses)
        .map(|(perf, course)| {
            is_poor(perf.as_deref()).then(|| {
                recommend(course.as_deref().unwrap_or_default()).join(RECOMMENDATION_SEPARATOR)
            })
        })
        .collect();

    out.with_column(Column::new(COURSE_RECOMMENDATION.into(), recommendations))?;
    Ok(out)
}

/// The Poor rows of the table with their recommendations
pub fn poor_rows_with_recommendations(df: &DataFrame) -> Result<Vec<RecommendationRow>, ViewError> {
    let df = ensure_performance(df)?;

    let names = string_values(&df, NAME)?;
    let courses = string_values(&df, COURSE_NAME)?;
    let performance = string_values(&df, PERFORMANCE)?;

    let rows: Vec<RecommendationRow> = names
        .into_iter()
        .zip(courses)
        .zip(performance)
        .filter(|(_, perf)| is_poor(perf.as_deref()))
        .map(|((name, course), _)| {
            let course = course.unwrap_or_default();
            RecommendationRow {
                name: name.unwrap_or_default(),
                recommendations: recommend(&course),
                course,
            }
        })
        .collect();

    tracing::debug!(rows = rows.len(), "Collected recommendations");
    Ok(rows)
}

fn ensure_performance(df: &DataFrame) -> Result<DataFrame, ViewError> {
    require_columns(df, &[NAME, COURSE_NAME])?;

    if has_column(df, PERFORMANCE) {
        Ok(df.clone())
    } else if has_column(df, GRADE) {
        with_performance(df)
    } else {
        Err(ViewError::MissingColumns {
            expected: vec![NAME.into(), COURSE_NAME.into(), PERFORMANCE.into()],
        })
    }
}

fn is_poor(cell: Option<&str>) -> bool {
    cell.and_then(|s| s.parse::<Performance>().ok()) == Some(Performance::Poor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_course_has_two_recommendations() {
        for (course, _) in RECOMMENDATIONS.iter() {
            assert_eq!(recommend(course).len(), 2, "{course}");
        }
    }

    #[test]
    fn test_unknown_course_returns_sentinel() {
        assert_eq!(recommend("COBOL"), vec![NO_RECOMMENDATIONS]);
        assert_eq!(recommend(""), vec![NO_RECOMMENDATIONS]);
        assert_eq!(recommend("python"), vec![NO_RECOMMENDATIONS]);
    }

    #[test]
    fn test_with_recommendations_uses_existing_performance() {
        let df = df! {
            "Name" => ["Alice", "Bob"],
            "Course Name" => ["JAVA", "JAVA"],
            "Performance" => ["Good", "Poor"],
        }
        .unwrap();

        let out = with_recommendations(&df).unwrap();
        let recs = string_values(&out, COURSE_RECOMMENDATION).unwrap();
        assert_eq!(recs[0], None);
        assert_eq!(
            recs[1].as_deref(),
            Some("Java Programming for Beginners (Udemy, Coursera); Advanced Java (Coursera)")
        );
    }

    #[test]
    fn test_requires_performance_or_grade() {
        let df = df! {
            "Name" => ["Alice"],
            "Course Name" => ["JAVA"],
        }
        .unwrap();

        let err = with_recommendations(&df).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Required columns (Name, Course Name, Performance) not found in the dataset!"
        );
    }
}
