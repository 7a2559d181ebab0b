use super::ScreenConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Tsv,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "line-screen")]
#[command(about = "Score each line of a text block with several sentiment/toxicity engines")]
pub struct CliArgs {
    /// File holding the submission; stdin when omitted.
    pub input: Option<PathBuf>,

    #[arg(long, help = "Also run the remote toxicity engine")]
    pub remote: bool,

    #[arg(long, help = "API key for the remote toxicity service")]
    pub api_key: Option<String>,

    #[arg(long, default_value = super::DEFAULT_REMOTE_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value_t = super::DEFAULT_MAX_LINES)]
    pub max_lines: usize,

    #[arg(long, default_value_t = super::DEFAULT_MAX_BYTES)]
    pub max_bytes: usize,

    #[arg(long, default_value_t = super::DEFAULT_CONCURRENT_LINES)]
    pub concurrent_lines: usize,

    #[arg(long, default_value_t = super::DEFAULT_REMOTE_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, default_value_t = super::DEFAULT_REMOTE_CHAR_LIMIT)]
    pub remote_char_limit: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Write the rendered table here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON instead of compact text")]
    pub log_json: bool,
}

impl CliArgs {
    pub fn to_config(&self) -> ScreenConfig {
        ScreenConfig {
            max_lines: self.max_lines,
            max_bytes: self.max_bytes,
            concurrent_lines: self.concurrent_lines,
            remote_endpoint: self.endpoint.clone(),
            remote_api_key: self.api_key.clone(),
            remote_timeout_secs: self.timeout_secs,
            remote_char_limit: self.remote_char_limit,
        }
    }
}
