//! Descriptive statistics over numeric columns

use polars::prelude::*;
use serde::Serialize;

use super::columns::ViewError;

/// Summary statistics for one numeric column.
///
/// `std` is the sample standard deviation (n - 1). Quartiles use linear
/// interpolation between closest ranks. Statistics that are undefined for
/// the available values are NaN.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    pub fn from_values(column: impl Into<String>, values: &[f64]) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let mean = if count == 0 {
            f64::NAN
        } else {
            sorted.iter().sum::<f64>() / count as f64
        };
        let std = if count < 2 {
            f64::NAN
        } else {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        };

        Self {
            column: column.into(),
            count,
            mean,
            std,
            min: sorted.first().copied().unwrap_or(f64::NAN),
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted.last().copied().unwrap_or(f64::NAN),
        }
    }

    /// Statistic labels and values in display order
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.median),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Describe every numeric column of the table, in column order
pub fn describe(df: &DataFrame) -> Result<Vec<ColumnStats>, ViewError> {
    let mut stats = Vec::new();

    for column in df.get_columns() {
        if !column.dtype().is_primitive_numeric() {
            continue;
        }
        let floats = column.cast(&DataType::Float64)?;
        let values: Vec<f64> = floats.f64()?.into_iter().flatten().collect();
        stats.push(ColumnStats::from_values(column.name().to_string(), &values));
    }

    Ok(stats)
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}
