//! Gradelens: Grade Sheet Reporting Library
//!
//! Loads a CSV of student grades and derives class reports: grade
//! distributions, per-student strengths and weaknesses, good/poor student
//! pairing, static course recommendations and CSV exports. Also generates
//! synthetic grade sheets from a roster.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
