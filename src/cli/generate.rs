//! Synthetic dataset generation command

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::pipeline::{generate, GenerateOutcome, COURSES};
use crate::utils::{create_spinner, finish_with_success, finish_with_warning};

/// Run the roster expansion and report what was written
///
/// # Arguments
/// * `roster` - Roster CSV with `Sl. No.`, `Name` and `MAIL` columns
/// * `output` - Where the expanded grade sheet is written
/// * `seed` - Optional RNG seed for reproducible marks
pub fn run_generate(roster: &Path, output: &Path, seed: Option<u64>) -> Result<()> {
    println!(
        "\n {} Generating synthetic grade sheet",
        style("◆").cyan().bold()
    );
    println!("   Roster:  {}", style(roster.display()).dim());
    println!("   Output:  {}", style(output.display()).dim());
    println!("   Courses: {}", style(COURSES.join(", ")).dim());
    if let Some(seed) = seed {
        println!("   Seed:    {}", style(seed).dim());
    }
    println!();

    let spinner = create_spinner("Expanding roster...");
    match generate(roster, output, seed)? {
        GenerateOutcome::Written { path, rows } => {
            finish_with_success(&spinner, &format!("{} rows generated", rows));
            println!();
            println!(
                " {} Processed dataset created and saved as '{}'",
                style("✓").green().bold(),
                path.display()
            );
        }
        GenerateOutcome::Skipped => {
            finish_with_warning(
                &spinner,
                "Roster is empty or could not be read; no dataset written",
            );
        }
    }

    Ok(())
}
