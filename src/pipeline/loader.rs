//! Dataset loader for grade CSV files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::utils::{create_spinner, finish_with_success};

/// Default number of rows used for CSV schema inference
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 10_000;

/// Load a CSV file into memory.
///
/// `infer_schema_length` of 0 scans the whole file for type inference.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    ensure_csv(path)?;

    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(schema_length)
        .finish()
        .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded dataset"
    );

    Ok(df)
}

/// Load a dataset behind a spinner and report its shape.
///
/// Returns the frame, row count, column count and estimated memory in MB.
pub fn load_dataset_with_progress(
    path: &Path,
    infer_schema_length: usize,
) -> Result<(DataFrame, usize, usize, f64)> {
    let spinner = create_spinner(&format!("Loading {}...", path.display()));
    let df = match load_dataset(path, infer_schema_length) {
        Ok(df) => df,
        Err(err) => {
            spinner.finish_and_clear();
            return Err(err);
        }
    };
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    Ok((df, rows, cols, memory_mb))
}

fn ensure_csv(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "csv" {
        anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv",
            extension
        );
    }
    Ok(())
}
