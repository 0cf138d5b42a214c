//! Tests for CLI argument parsing and the binary

use assert_cmd::Command;
use clap::Parser;
use gradelens::cli::{Cli, Commands, ExportScope, SelectionMode, View};
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["gradelens"]);

    assert!(cli.command.is_none(), "No view means interactive menu");
    assert!(cli.input.is_none());
    assert_eq!(cli.out_dir, PathBuf::from("."));
    assert_eq!(cli.preview_rows, 5, "Default preview should be 5 rows");
    assert_eq!(
        cli.infer_schema_length, 10000,
        "Default schema inference should be 10000"
    );
    assert!(!cli.no_confirm, "Default no_confirm should be false");
    assert_eq!(cli.selection_mode(), SelectionMode::Interactive);
}

#[test]
fn test_cli_no_confirm_selects_first() {
    let cli = Cli::parse_from(["gradelens", "--no-confirm", "-i", "grades.csv", "report"]);

    assert_eq!(cli.selection_mode(), SelectionMode::First);
    assert_eq!(cli.input, Some(PathBuf::from("grades.csv")));
    assert_eq!(cli.session_settings().selection, SelectionMode::First);
}

#[test]
fn test_cli_rejects_zero_preview_rows() {
    let result = Cli::try_parse_from(["gradelens", "--preview-rows", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_commands_map_to_views() {
    let cli = Cli::parse_from(["gradelens", "course", "-c", "LINUX"]);
    assert_eq!(
        cli.command.and_then(Commands::into_view),
        Some(View::Course {
            course: Some("LINUX".to_string())
        })
    );

    let cli = Cli::parse_from(["gradelens", "export", "-s", "Alice", "--with-derived"]);
    assert_eq!(
        cli.command.and_then(Commands::into_view),
        Some(View::Export {
            scope: ExportScope::Student(Some("Alice".to_string())),
            with_derived: true,
        })
    );

    let cli = Cli::parse_from(["gradelens", "export"]);
    assert_eq!(
        cli.command.and_then(Commands::into_view),
        Some(View::Export {
            scope: ExportScope::All,
            with_derived: false,
        })
    );

    let cli = Cli::parse_from(["gradelens", "generate", "--seed", "9"]);
    assert!(cli.command.and_then(Commands::into_view).is_none());
}

#[test]
fn test_generate_defaults() {
    let cli = Cli::parse_from(["gradelens", "generate"]);
    match cli.command {
        Some(Commands::Generate {
            roster,
            output,
            seed,
        }) => {
            assert_eq!(roster, PathBuf::from("namelist.csv"));
            assert_eq!(output, PathBuf::from("synthetic_data.csv"));
            assert!(seed.is_none());
        }
        other => panic!("Expected generate, got {:?}", other),
    }
}

#[test]
fn test_binary_dashboard_view() {
    let mut df = create_grades_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    Command::cargo_bin("gradelens")
        .unwrap()
        .arg("--no-confirm")
        .arg("-i")
        .arg(&csv_path)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade Distribution"))
        .stdout(predicate::str::contains("Count"));
}

#[test]
fn test_binary_view_without_data_warns() {
    Command::cargo_bin("gradelens")
        .unwrap()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please upload data first!"));
}

#[test]
fn test_binary_generate() {
    let temp_dir = TempDir::new().unwrap();
    let roster = write_lines(
        temp_dir.path(),
        "namelist.csv",
        &["Sl. No.,Name,MAIL", "1,Alice,alice@uni.edu"],
    );
    let output = temp_dir.path().join("synthetic_data.csv");

    Command::cargo_bin("gradelens")
        .unwrap()
        .arg("generate")
        .arg("--roster")
        .arg(&roster)
        .arg("-o")
        .arg(&output)
        .arg("--seed")
        .arg("11")
        .assert()
        .success();

    assert!(output.exists());
}
