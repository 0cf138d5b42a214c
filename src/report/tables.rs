//! comfy-table rendering for the report views

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use polars::prelude::*;

use crate::pipeline::{
    string_values, ColumnStats, GradeCount, GradeEntry, Pair, RecommendationRow, ViewError,
};

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

/// Render the first `limit` rows of a table (all rows when `None`).
///
/// Null cells are shown as `null`.
pub fn frame_table(df: &DataFrame, limit: Option<usize>) -> Result<Table, ViewError> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let headers: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut table = new_table(&headers);

    let rows = limit.map_or(df.height(), |n| n.min(df.height()));
    let columns = names
        .iter()
        .map(|name| string_values(df, name))
        .collect::<Result<Vec<_>, _>>()?;

    for row in 0..rows {
        table.add_row(
            columns
                .iter()
                .map(|values| Cell::new(values[row].as_deref().unwrap_or("null")))
                .collect::<Vec<_>>(),
        );
    }

    Ok(table)
}

/// Grade counts as a two-column table
pub fn distribution_table(counts: &[GradeCount]) -> Table {
    let mut table = new_table(&["Grade", "Count"]);
    for (grade, count) in counts {
        table.add_row(vec![
            Cell::new(grade),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Statistics laid out with one column per numeric field
pub fn stats_table(stats: &[ColumnStats]) -> Table {
    let mut headers = vec![""];
    headers.extend(stats.iter().map(|s| s.column.as_str()));
    let mut table = new_table(&headers);

    let labels = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
    for (i, label) in labels.iter().enumerate() {
        let mut row = vec![Cell::new(label).add_attribute(Attribute::Bold)];
        row.extend(stats.iter().map(|s| {
            let (_, value) = s.rows()[i];
            Cell::new(format_stat(value)).set_alignment(CellAlignment::Right)
        }));
        table.add_row(row);
    }
    table
}

/// Name/Grade rows for the top performer and needs-improvement lists
pub fn grade_entries_table(entries: &[GradeEntry]) -> Table {
    let mut table = new_table(&["Name", "Grade"]);
    for entry in entries {
        table.add_row(vec![Cell::new(&entry.name), Cell::new(&entry.grade)]);
    }
    table
}

pub fn pairs_table(pairs: &[Pair]) -> Table {
    let mut table = new_table(&["Poor Performer", "Good Performer"]);
    for pair in pairs {
        table.add_row(vec![
            Cell::new(&pair.poor).fg(Color::Red),
            Cell::new(&pair.good).fg(Color::Green),
        ]);
    }
    table
}

pub fn recommendations_table(rows: &[RecommendationRow]) -> Table {
    let mut table = new_table(&["Name", "Course Name", "Course Recommendation"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(&row.course),
            Cell::new(row.recommendations.join("\n")),
        ]);
    }
    table
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.6}", value)
    }
}
