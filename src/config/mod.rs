#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_LINES: usize = 50;
pub const DEFAULT_MAX_BYTES: usize = 125_000;
pub const DEFAULT_CONCURRENT_LINES: usize = 5;
pub const DEFAULT_REMOTE_ENDPOINT: &str =
    "https://commentanalyzer.googleapis.com/v1alpha1/comments:analyze";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REMOTE_CHAR_LIMIT: usize = 2900;

/// Runtime configuration for one screening service. The line-count and
/// byte-size ceilings are independent knobs; neither is derived from the
/// other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub max_lines: usize,
    pub max_bytes: usize,
    pub concurrent_lines: usize,
    pub remote_endpoint: String,
    pub remote_api_key: Option<String>,
    pub remote_timeout_secs: u64,
    pub remote_char_limit: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_bytes: DEFAULT_MAX_BYTES,
            concurrent_lines: DEFAULT_CONCURRENT_LINES,
            remote_endpoint: DEFAULT_REMOTE_ENDPOINT.to_string(),
            remote_api_key: None,
            remote_timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
            remote_char_limit: DEFAULT_REMOTE_CHAR_LIMIT,
        }
    }
}

impl ConfigProvider for ScreenConfig {
    fn max_lines(&self) -> usize {
        self.max_lines
    }

    fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    fn concurrent_lines(&self) -> usize {
        self.concurrent_lines
    }
}

impl Validate for ScreenConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("max_lines", self.max_lines, 1)?;
        validate_positive_number("max_bytes", self.max_bytes, 1)?;
        validate_positive_number("concurrent_lines", self.concurrent_lines, 1)?;
        validate_positive_number("remote_char_limit", self.remote_char_limit, 1)?;
        validate_range("remote_timeout_secs", self.remote_timeout_secs, 1, 300)?;
        validate_url("remote_endpoint", &self.remote_endpoint)?;
        if let Some(key) = &self.remote_api_key {
            validate_non_empty_string("remote_api_key", key)?;
        }
        Ok(())
    }
}
