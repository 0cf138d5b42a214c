//! Horizontal bar charts for grade distributions

use console::style;

use crate::pipeline::GradeCount;

/// Width of the longest bar in characters
pub const BAR_WIDTH: usize = 40;

/// Color used for the bars of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Cyan,
    Green,
}

/// Render a titled bar chart, one line per grade.
///
/// Bars scale against the largest count; any non-zero count gets at least
/// one block.
pub fn bar_chart(title: &str, counts: &[GradeCount], color: BarColor) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    if counts.is_empty() {
        out.push_str("(no grades)\n");
        return out;
    }

    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let label_width = counts
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, count) in counts {
        let bar = "█".repeat(bar_length(*count, max));
        let bar = match color {
            BarColor::Cyan => style(bar).cyan(),
            BarColor::Green => style(bar).green(),
        };
        out.push_str(&format!(
            "{:>width$} │ {} {}\n",
            label,
            bar,
            count,
            width = label_width
        ));
    }

    out.push_str(&format!(
        "{:>width$}   Grades vs. Number of Students\n",
        "",
        width = label_width
    ));
    out
}

fn bar_length(count: usize, max: usize) -> usize {
    if max == 0 {
        0
    } else {
        (count * BAR_WIDTH).div_ceil(max)
    }
}
