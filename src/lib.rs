pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod engines;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;
pub use crate::config::ScreenConfig;

pub use crate::core::batch::BatchScorer;
pub use crate::core::sanitize::Sanitizer;
pub use crate::domain::model::{Rejection, ResultRow, ResultTable, SafeText, ScoreResult};
pub use crate::engines::EngineSet;
pub use crate::utils::error::{Result, ScoreError};
