//! Session state and the report views
//!
//! A `Session` owns the loaded table for the lifetime of the process. Each
//! `View` declares the columns it needs; `Session::run` checks them before
//! dispatching to the view's handler. Derived columns are computed into
//! fresh tables and never written back into the session.

use std::path::{Path, PathBuf};

use anyhow::Result;
use polars::prelude::*;

use super::prompts::{choose, prompt_path, resolve, select_menu_entry, SelectionMode};
use crate::pipeline::{
    course_analysis, describe, export_all, export_student, grade_distribution,
    load_dataset_with_progress, needs_improvement, pair_performers,
    poor_rows_with_recommendations, require_columns, student_strengths, top_performers,
    unique_values, with_recommendations, ViewError, COURSE_NAME, GRADE, NAME,
};
use crate::report::{
    bar_chart, distribution_table, export_pairs_json, frame_table, grade_entries_table,
    pairs_table, recommendations_table, stats_table, BarColor, PairingSummary,
};
use crate::utils::{
    create_spinner, finish_with_success, print_completion, print_count, print_dataset_card,
    print_indented, print_info, print_section, print_success, print_view_header, print_warning,
};

/// Runtime configuration shared by every view
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub out_dir: PathBuf,
    pub preview_rows: usize,
    pub infer_schema_length: usize,
    pub selection: SelectionMode,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            preview_rows: 5,
            infer_schema_length: crate::pipeline::DEFAULT_INFER_SCHEMA_LENGTH,
            selection: SelectionMode::Interactive,
        }
    }
}

/// Which rows an export writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportScope {
    /// Ask the user
    Ask,
    All,
    /// One student's rows; `None` prompts for the student
    Student(Option<String>),
}

/// The eight report views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Upload { path: Option<PathBuf> },
    Report,
    Strengths { student: Option<String> },
    Recommend,
    Pair { json: Option<PathBuf> },
    Dashboard,
    Course { course: Option<String> },
    Export { scope: ExportScope, with_derived: bool },
}

/// How a view run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    Rendered,
    /// The view showed a warning instead of its content
    Warned(String),
}

impl View {
    /// Every view with nothing pre-selected, in menu order
    pub fn menu() -> [View; 8] {
        [
            View::Upload { path: None },
            View::Report,
            View::Strengths { student: None },
            View::Recommend,
            View::Pair { json: None },
            View::Dashboard,
            View::Course { course: None },
            View::Export {
                scope: ExportScope::Ask,
                with_derived: false,
            },
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Upload { .. } => "📤 Upload Data",
            View::Report => "📋 Read Performance Report",
            View::Strengths { .. } => "💪 Highlight Strengths & Weaknesses",
            View::Recommend => "📚 Recommend To-Do Courses",
            View::Pair { .. } => "🤝 Pair Poor Performers",
            View::Dashboard => "📊 Class Performance Dashboard",
            View::Course { .. } => "🔍 Course-Specific Analysis",
            View::Export { .. } => "📤 Export Reports",
        }
    }

    /// Columns that must be present before the view runs
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            View::Upload { .. } | View::Report => &[],
            View::Strengths { .. } | View::Pair { .. } => &[NAME, GRADE, COURSE_NAME],
            View::Recommend => &[NAME, COURSE_NAME],
            View::Dashboard => &[GRADE],
            View::Course { .. } => &[COURSE_NAME, GRADE],
            View::Export { scope, .. } => match scope {
                ExportScope::Student(_) => &[NAME],
                _ => &[],
            },
        }
    }
}

/// The loaded dataset and the settings the views run with
pub struct Session {
    table: Option<DataFrame>,
    source: Option<PathBuf>,
    settings: SessionSettings,
}

impl Session {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            table: None,
            source: None,
            settings,
        }
    }

    /// Start a session over an already loaded table
    pub fn with_table(settings: SessionSettings, table: DataFrame) -> Self {
        Self {
            table: Some(table),
            source: None,
            settings,
        }
    }

    pub fn table(&self) -> Option<&DataFrame> {
        self.table.as_ref()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Load a CSV, replacing any previously loaded table
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let (df, rows, cols, memory_mb) =
            load_dataset_with_progress(path, self.settings.infer_schema_length)?;
        print_dataset_card(path, rows, cols, memory_mb);
        self.table = Some(df);
        self.source = Some(path.to_path_buf());
        Ok(())
    }

    /// Capability check: data is loaded and the view's columns exist
    pub fn check(&self, view: &View) -> Result<&DataFrame, ViewError> {
        let df = self.table.as_ref().ok_or(ViewError::NoData)?;
        require_columns(df, view.required_columns())?;
        Ok(df)
    }

    /// Run one view. Missing data or columns become a warning, not an error.
    pub fn run(&mut self, view: View) -> Result<ViewOutcome> {
        let title = view.title();
        print_view_header(title);
        tracing::debug!(view = title, "Running view");

        let result = match view {
            View::Upload { path } => self.upload(path),
            other => match self.check(&other) {
                Ok(df) => self.render(df, other),
                Err(err) => Err(err.into()),
            },
        };

        let err = match result {
            Ok(()) => return Ok(ViewOutcome::Rendered),
            Err(err) => err,
        };

        let warning = err
            .downcast_ref::<ViewError>()
            .filter(|e| e.is_warning())
            .map(|e| e.to_string());
        match warning {
            Some(message) => {
                tracing::warn!(view = title, "{}", message);
                print_warning(&message);
                Ok(ViewOutcome::Warned(message))
            }
            None => Err(err),
        }
    }

    fn render(&self, df: &DataFrame, view: View) -> Result<()> {
        match view {
            View::Upload { .. } => Ok(()),
            View::Report => self.report(df),
            View::Strengths { student } => self.strengths(df, student),
            View::Recommend => self.recommend(df),
            View::Pair { json } => self.pair(df, json),
            View::Dashboard => self.dashboard(df),
            View::Course { course } => self.course(df, course),
            View::Export {
                scope,
                with_derived,
            } => self.export(df, scope, with_derived),
        }
    }

    fn upload(&mut self, path: Option<PathBuf>) -> Result<()> {
        if let Some(path) = path {
            self.load(&path)?;
            print_success("File uploaded successfully!");
        }

        let df = self.table.as_ref().ok_or(ViewError::NoData)?;
        print_section("📊 Uploaded Dataset Preview:");
        let preview = df.head(Some(self.settings.preview_rows));
        print_indented(&frame_table(&preview, None)?.to_string());
        Ok(())
    }

    fn report(&self, df: &DataFrame) -> Result<()> {
        let stats = describe(df)?;
        if stats.is_empty() {
            print_info("No numeric columns to describe");
            return Ok(());
        }
        print_indented(&stats_table(&stats).to_string());
        Ok(())
    }

    fn strengths(&self, df: &DataFrame, student: Option<String>) -> Result<()> {
        print_section("🏆 Top Performers:");
        print_indented(&grade_entries_table(&top_performers(df)?).to_string());

        print_section("⚠️ Students Needing Improvement:");
        print_indented(&grade_entries_table(&needs_improvement(df)?).to_string());

        let students = unique_values(df, NAME)?;
        let Some(student) = resolve(
            student,
            self.settings.selection,
            "Select a Student to Analyze",
            &students,
        )?
        else {
            print_info("No student selected");
            return Ok(());
        };

        let strengths = student_strengths(df, &student)?;
        print_section(&format!("📈 Strong Subjects for {}:", strengths.student));
        print_indented(&list_or_none(&strengths.strong));
        print_section(&format!("📉 Weak Subjects for {}:", strengths.student));
        print_indented(&list_or_none(&strengths.weak));
        Ok(())
    }

    fn recommend(&self, df: &DataFrame) -> Result<()> {
        let rows = poor_rows_with_recommendations(df)?;
        if rows.is_empty() {
            print_info("No rows with Poor performance");
            return Ok(());
        }
        print_count("row(s) with Poor performance", rows.len(), None);
        print_indented(&recommendations_table(&rows).to_string());
        Ok(())
    }

    fn pair(&self, df: &DataFrame, json: Option<PathBuf>) -> Result<()> {
        let pairing = pair_performers(df)?;

        print_section("📌 Student Pairs for Collaboration:");
        if pairing.pairs.is_empty() {
            print_info("No pairs: need at least one Good and one Poor student");
        } else {
            print_indented(&pairs_table(&pairing.pairs).to_string());
        }
        PairingSummary::from_pairing(&pairing).display();

        if let Some(path) = json {
            export_pairs_json(&pairing, self.source(), &path)?;
            print_success(&format!("Pairs written to {}", path.display()));
        }
        Ok(())
    }

    fn dashboard(&self, df: &DataFrame) -> Result<()> {
        let counts = grade_distribution(df)?;
        print_section("📊 Class Performance Overview");
        print_indented(&bar_chart("Grade Distribution", &counts, BarColor::Cyan));
        print_indented(&distribution_table(&counts).to_string());
        Ok(())
    }

    fn course(&self, df: &DataFrame, course: Option<String>) -> Result<()> {
        let courses = unique_values(df, COURSE_NAME)?;
        let Some(course) = resolve(course, self.settings.selection, "Select a Course", &courses)?
        else {
            print_info("No course selected");
            return Ok(());
        };

        let analysis = course_analysis(df, &course)?;
        print_indented(&frame_table(&analysis.rows, None)?.to_string());
        print_indented(&bar_chart(
            &format!("Performance in {}", analysis.course),
            &analysis.distribution,
            BarColor::Green,
        ));
        print_indented(&distribution_table(&analysis.distribution).to_string());
        Ok(())
    }

    fn export(&self, df: &DataFrame, scope: ExportScope, with_derived: bool) -> Result<()> {
        let table = if with_derived {
            with_recommendations(df)?
        } else {
            df.clone()
        };

        let scope = match scope {
            ExportScope::Ask => {
                let options = [
                    "Export All Students".to_string(),
                    "Export Individual Student".to_string(),
                ];
                match choose(self.settings.selection, "Select Export Type", &options)?.as_deref() {
                    Some("Export Individual Student") => ExportScope::Student(None),
                    Some(_) => ExportScope::All,
                    None => return Ok(()),
                }
            }
            other => other,
        };

        let dir = &self.settings.out_dir;
        let path = match scope {
            ExportScope::Student(student) => {
                let students = unique_values(&table, NAME)?;
                let Some(student) =
                    resolve(student, self.settings.selection, "Select a Student", &students)?
                else {
                    print_info("No student selected");
                    return Ok(());
                };
                let spinner = create_spinner(&format!("Exporting {}'s report...", student));
                let path = export_student(&table, &student, dir);
                spinner.finish_and_clear();
                path?
            }
            _ => {
                let spinner = create_spinner("Exporting full report...");
                let path = export_all(&table, dir)?;
                finish_with_success(&spinner, "Full report exported");
                path
            }
        };

        print_success(&format!("Saved to {}", path.display()));
        Ok(())
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// Menu loop: pick a view, run it, repeat until the user quits
pub fn run_interactive(session: &mut Session) -> Result<()> {
    let menu = View::menu();
    let mut items: Vec<&str> = menu.iter().map(View::title).collect();
    items.push("🚪 Quit");

    loop {
        let Some(choice) = select_menu_entry(&items)? else {
            break;
        };
        let Some(mut view) = menu.get(choice).cloned() else {
            break;
        };

        if let View::Upload { path } = &mut view {
            *path = prompt_path("Choose a CSV file", session.source())?;
        }

        if let Err(err) = session.run(view) {
            tracing::error!(error = %format!("{err:#}"), "View failed");
            print_warning(&format!("{err:#}"));
        }
    }

    print_completion();
    Ok(())
}
