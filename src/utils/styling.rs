//! Terminal styling utilities for the report views

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("gradelens").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("Class performance reports from a grade sheet").dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the loaded dataset card
pub fn print_dataset_card(input: &Path, rows: usize, cols: usize, memory_mb: f64) {
    println!("    {} Input:   {}", FOLDER, truncate_path(input, 60));
    println!(
        "    {} Shape:   {} rows × {} columns ({:.2} MB)",
        SAVE,
        style(rows).yellow(),
        style(cols).yellow(),
        memory_mb
    );
}

/// Print a view header with styling
pub fn print_view_header(title: &str) {
    println!();
    println!("    {}", style(title).white().bold());
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a sub-section heading inside a view
pub fn print_section(title: &str) {
    println!();
    println!("    {}", style(title).cyan().bold());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print the session farewell
pub fn print_completion() {
    println!();
    println!("    {} {}", ROCKET, style("gradelens session complete!").green().bold());
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!("      Found {} {}", style(count).yellow().bold(), description);
    }
}

/// Indent a multi-line block (tables, charts) to the view margin
pub fn print_indented(block: &str) {
    for line in block.lines() {
        println!("    {}", line);
    }
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}
