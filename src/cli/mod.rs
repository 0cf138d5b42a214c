//! CLI module - argument parsing, interactive prompts and the view session

mod args;
pub mod generate;
mod prompts;
pub mod session;

pub use args::{Cli, Commands};
pub use prompts::*;
pub use session::{run_interactive, ExportScope, Session, SessionSettings, View, ViewOutcome};
