//! Interactive prompts using dialoguer

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::{Input, Select};

/// How views resolve a student or course the user did not name up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Ask with a selection menu
    Interactive,
    /// Take the first value found in the data
    First,
}

/// Pick one of `options`. Returns `None` when there is nothing to pick or the user cancels.
pub fn choose(mode: SelectionMode, prompt: &str, options: &[String]) -> Result<Option<String>> {
    if options.is_empty() {
        return Ok(None);
    }

    match mode {
        SelectionMode::First => Ok(options.first().cloned()),
        SelectionMode::Interactive => {
            let choice = Select::new()
                .with_prompt(prompt)
                .items(options)
                .default(0)
                .interact_opt()?;
            Ok(choice.map(|i| options[i].clone()))
        }
    }
}

/// Use `given` when present, otherwise prompt
pub fn resolve(
    given: Option<String>,
    mode: SelectionMode,
    prompt: &str,
    options: &[String],
) -> Result<Option<String>> {
    match given {
        Some(value) => Ok(Some(value)),
        None => choose(mode, prompt, options),
    }
}

/// Select an entry of the main feature menu
pub fn select_menu_entry(items: &[&str]) -> Result<Option<usize>> {
    let choice = Select::new()
        .with_prompt("Select a Feature")
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(choice)
}

/// Ask for a CSV path. An empty answer means no path.
pub fn prompt_path(prompt: &str, default: Option<&Path>) -> Result<Option<PathBuf>> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(path) = default {
        input = input.default(path.display().to_string());
    }
    let answer = input.interact_text()?;
    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_first_mode() {
        let options = vec!["Alice".to_string(), "Bob".to_string()];
        let picked = choose(SelectionMode::First, "Select a Student", &options).unwrap();
        assert_eq!(picked.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_choose_no_options() {
        let picked = choose(SelectionMode::Interactive, "Select a Student", &[]).unwrap();
        assert!(picked.is_none());
    }

    #[test]
    fn test_resolve_prefers_given_value() {
        let options = vec!["Alice".to_string()];
        let picked = resolve(
            Some("Bob".to_string()),
            SelectionMode::Interactive,
            "Select a Student",
            &options,
        )
        .unwrap();
        assert_eq!(picked.as_deref(), Some("Bob"));
    }
}
