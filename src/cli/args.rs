//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::prompts::SelectionMode;
use super::session::{ExportScope, SessionSettings, View};

/// Gradelens - class performance reports, pairing and course recommendations from a grade CSV.
///
/// Run without a view to open the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "gradelens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Grade sheet to load (CSV)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory where exported reports are written
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Number of rows shown in the dataset preview
    #[arg(long, default_value = "5", value_parser = validate_preview_rows)]
    pub preview_rows: usize,

    /// Number of rows to use for schema inference.
    /// Use 0 for full table scan.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Never prompt; views that need a student or course use the first one in the data
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Enable debug logging (RUST_LOG takes priority)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load a dataset (or reuse -i) and preview its first rows
    Upload {
        /// CSV file to load
        path: Option<PathBuf>,
    },

    /// Descriptive statistics over the numeric columns
    Report,

    /// Top performers, students needing improvement, and one student's strong/weak courses
    Strengths {
        /// Student to analyze
        #[arg(short, long)]
        student: Option<String>,
    },

    /// Course recommendations for every Poor row
    Recommend,

    /// Pair poor performers with good performers
    Pair {
        /// Also write the pairs to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Class grade distribution chart
    Dashboard,

    /// Rows and grade distribution for a single course
    Course {
        /// Course to analyze
        #[arg(short, long)]
        course: Option<String>,
    },

    /// Export the full table, or one student's rows, as CSV
    Export {
        /// Export only this student's rows
        #[arg(short, long)]
        student: Option<String>,

        /// Include the derived Performance and Course Recommendation columns
        #[arg(long, default_value = "false")]
        with_derived: bool,
    },

    /// Generate a synthetic grade sheet from a roster
    Generate {
        /// Roster CSV with 'Sl. No.', 'Name' and 'MAIL' columns
        #[arg(long, default_value = "namelist.csv")]
        roster: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "synthetic_data.csv")]
        output: PathBuf,

        /// Seed for reproducible marks
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    pub fn selection_mode(&self) -> SelectionMode {
        if self.no_confirm {
            SelectionMode::First
        } else {
            SelectionMode::Interactive
        }
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            out_dir: self.out_dir.clone(),
            preview_rows: self.preview_rows,
            infer_schema_length: self.infer_schema_length,
            selection: self.selection_mode(),
        }
    }
}

impl Commands {
    /// The report view for this command, or `None` for `generate`
    pub fn into_view(self) -> Option<View> {
        let view = match self {
            Commands::Upload { path } => View::Upload { path },
            Commands::Report => View::Report,
            Commands::Strengths { student } => View::Strengths { student },
            Commands::Recommend => View::Recommend,
            Commands::Pair { json } => View::Pair { json },
            Commands::Dashboard => View::Dashboard,
            Commands::Course { course } => View::Course { course },
            Commands::Export {
                student,
                with_derived,
            } => View::Export {
                scope: match student {
                    Some(name) => ExportScope::Student(Some(name)),
                    None => ExportScope::All,
                },
                with_derived,
            },
            Commands::Generate { .. } => return None,
        };
        Some(view)
    }
}

/// Validator for preview_rows parameter
fn validate_preview_rows(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid row count", s))?;

    if value == 0 {
        Err("preview_rows must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
