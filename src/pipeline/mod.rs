//! Pipeline module - loading, classification and the derived views

pub mod columns;
pub mod distribution;
pub mod export;
pub mod grades;
pub mod loader;
pub mod pairing;
pub mod recommend;
pub mod stats;
pub mod strengths;
pub mod synthetic;

pub use columns::*;
pub use distribution::*;
pub use export::*;
pub use grades::*;
pub use loader::*;
pub use pairing::*;
pub use recommend::*;
pub use stats::*;
pub use strengths::*;
pub use synthetic::*;
