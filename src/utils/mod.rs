//! Utility module - terminal styling, spinners and logging

pub mod logging;
pub mod progress;
pub mod styling;

pub use progress::*;
pub use styling::*;
