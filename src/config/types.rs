//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! by the sample runner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_PAGE_URL;
use crate::document::ReadyState;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options for the sample runner.
///
/// The runner loads a static page from disk, starts the page initializer
/// against it, then replays the requested interactions.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "aws_cli_sample",
    version,
    about = "Runs the AWS CLI component sample page behavior against a local HTML file"
)]
pub struct Opt {
    /// HTML page to load
    pub page: PathBuf,

    /// Location the page is served from (its hostname drives environment detection)
    #[arg(long, default_value = DEFAULT_PAGE_URL)]
    pub url: String,

    /// Document ready state at the moment the script runs
    #[arg(long, value_enum, default_value = "loading")]
    pub ready_state: ReadyState,

    /// Hover every `.button` element once after initialization
    #[arg(long)]
    pub hover_buttons: bool,

    /// Click the anchor whose href equals this value (repeatable)
    #[arg(long = "click", value_name = "HREF")]
    pub clicks: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::try_parse_from(["aws_cli_sample", "index.html"]).unwrap();
        assert_eq!(opt.page, PathBuf::from("index.html"));
        assert_eq!(opt.url, DEFAULT_PAGE_URL);
        assert_eq!(opt.ready_state, ReadyState::Loading);
        assert!(!opt.hover_buttons);
        assert!(opt.clicks.is_empty());
        assert!(matches!(opt.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_opt_repeated_clicks() {
        let opt = Opt::try_parse_from([
            "aws_cli_sample",
            "index.html",
            "--click",
            "#features",
            "--click",
            "#missing",
            "--ready-state",
            "complete",
            "--hover-buttons",
        ])
        .unwrap();
        assert_eq!(opt.clicks, vec!["#features", "#missing"]);
        assert_eq!(opt.ready_state, ReadyState::Complete);
        assert!(opt.hover_buttons);
    }

    #[test]
    fn test_opt_requires_page() {
        assert!(Opt::try_parse_from(["aws_cli_sample"]).is_err());
    }
}
