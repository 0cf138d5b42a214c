//! Report module - rendering views and exporting pairing results

pub mod chart;
pub mod pairs_export;
pub mod summary;
pub mod tables;

pub use chart::*;
pub use pairs_export::*;
pub use summary::*;
pub use tables::*;
