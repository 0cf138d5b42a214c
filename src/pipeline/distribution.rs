//! Grade distribution for the whole class and for a single course

use polars::prelude::*;

use super::columns::{filter_rows_eq, require_columns, string_values, ViewError, COURSE_NAME, GRADE};

/// Grade value and the number of rows carrying it
pub type GradeCount = (String, usize);

/// Rows of one course with their grade distribution
#[derive(Debug, Clone)]
pub struct CourseAnalysis {
    pub course: String,
    pub rows: DataFrame,
    pub distribution: Vec<GradeCount>,
}

/// Count rows per grade value, in the order values are first encountered.
pub fn grade_distribution(df: &DataFrame) -> Result<Vec<GradeCount>, ViewError> {
    require_columns(df, &[GRADE])?;
    Ok(count_values(&string_values(df, GRADE)?))
}

/// Filter to one course and count its grades
pub fn course_analysis(df: &DataFrame, course: &str) -> Result<CourseAnalysis, ViewError> {
    require_columns(df, &[COURSE_NAME, GRADE])?;

    let rows = filter_rows_eq(df, COURSE_NAME, course)?;
    if rows.height() == 0 {
        return Err(ViewError::UnknownCourse(course.to_string()));
    }

    let distribution = count_values(&string_values(&rows, GRADE)?);
    tracing::debug!(course, rows = rows.height(), "Course analysis computed");

    Ok(CourseAnalysis {
        course: course.to_string(),
        rows,
        distribution,
    })
}

fn count_values(values: &[Option<String>]) -> Vec<GradeCount> {
    let mut counts: Vec<GradeCount> = Vec::new();
    for value in values.iter().flatten() {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.clone(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_values_skips_nulls() {
        let values = vec![
            Some("B".to_string()),
            None,
            Some("A".to_string()),
            Some("B".to_string()),
        ];
        let counts = count_values(&values);
        assert_eq!(counts, vec![("B".to_string(), 2), ("A".to_string(), 1)]);
    }

    #[test]
    fn test_count_values_empty() {
        assert!(count_values(&[]).is_empty());
    }
}
