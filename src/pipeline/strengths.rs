//! Strong and weak courses per student

use polars::prelude::*;
use serde::Serialize;

use super::columns::{
    filter_rows_eq, require_columns, string_values, ViewError, COURSE_NAME, GRADE, NAME,
};
use super::grades::{classify_cell, Grade, Performance};

/// Courses where a student scored A/B (strong) or D/F (weak), in row order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentStrengths {
    pub student: String,
    pub strong: Vec<String>,
    pub weak: Vec<String>,
}

/// A single (name, grade) row for the class-wide highlight lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeEntry {
    pub name: String,
    pub grade: String,
}

pub fn student_strengths(df: &DataFrame, student: &str) -> Result<StudentStrengths, ViewError> {
    require_columns(df, &[NAME, GRADE, COURSE_NAME])?;

    let rows = filter_rows_eq(df, NAME, student)?;
    if rows.height() == 0 {
        return Err(ViewError::UnknownStudent(student.to_string()));
    }

    let grades = string_values(&rows, GRADE)?;
    let courses = string_values(&rows, COURSE_NAME)?;

    let mut strong = Vec::new();
    let mut weak = Vec::new();
    for (grade, course) in grades.iter().zip(courses) {
        let Some(course) = course else { continue };
        match classify_cell(grade.as_deref()) {
            Performance::Good => strong.push(course),
            Performance::Poor => weak.push(course),
            Performance::Neutral => {}
        }
    }

    Ok(StudentStrengths {
        student: student.to_string(),
        strong,
        weak,
    })
}

/// Rows graded A
pub fn top_performers(df: &DataFrame) -> Result<Vec<GradeEntry>, ViewError> {
    entries_matching(df, |grade| grade == Grade::A)
}

/// Rows graded D or F
pub fn needs_improvement(df: &DataFrame) -> Result<Vec<GradeEntry>, ViewError> {
    entries_matching(df, |grade| matches!(grade, Grade::D | Grade::F))
}

fn entries_matching(
    df: &DataFrame,
    predicate: impl Fn(Grade) -> bool,
) -> Result<Vec<GradeEntry>, ViewError> {
    require_columns(df, &[NAME, GRADE])?;

    let names = string_values(df, NAME)?;
    let grades = string_values(df, GRADE)?;

    let entries = names
        .into_iter()
        .zip(grades)
        .filter_map(|(name, grade)| {
            let grade = grade?;
            let parsed = grade.parse::<Grade>().ok()?;
            predicate(parsed).then(|| GradeEntry {
                name: name.unwrap_or_default(),
                grade,
            })
        })
        .collect();

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_df() -> DataFrame {
        df! {
            "Name" => ["Alice", "Alice", "Alice", "Bob", "Bob"],
            "Course Name" => ["LINUX", "JAVA", "PYTHON", "LINUX", "JAVA"],
            "Grade" => ["A", "F", "C", "D", "A"],
        }
        .unwrap()
    }

    #[test]
    fn test_student_strengths() {
        let df = create_test_df();
        let alice = student_strengths(&df, "Alice").unwrap();
        assert_eq!(alice.strong, vec!["LINUX"]);
        assert_eq!(alice.weak, vec!["JAVA"]);
    }

    #[test]
    fn test_student_with_no_weak_courses() {
        let df = df! {
            "Name" => ["Cara", "Cara"],
            "Course Name" => ["LINUX", "JAVA"],
            "Grade" => ["B", "C"],
        }
        .unwrap();
        let cara = student_strengths(&df, "Cara").unwrap();
        assert_eq!(cara.strong, vec!["LINUX"]);
        assert!(cara.weak.is_empty());
    }

    #[test]
    fn test_unknown_student() {
        let df = create_test_df();
        let err = student_strengths(&df, "Zed").unwrap_err();
        assert!(matches!(err, ViewError::UnknownStudent(name) if name == "Zed"));
    }

    #[test]
    fn test_top_and_weak_lists() {
        let df = create_test_df();
        let top = top_performers(&df).unwrap();
        assert_eq!(top.len(), 2);
        assert!(top.iter().all(|e| e.grade == "A"));

        let weak = needs_improvement(&df).unwrap();
        let names: Vec<_> = weak.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }
}
