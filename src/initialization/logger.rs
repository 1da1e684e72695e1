//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::{LogFormat, CONSOLE_TARGET};
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. In plain format page
/// console lines are printed as-is and runner messages get a `[LEVEL]` prefix;
/// JSON format emits one object per record for both.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// Page console output is logged under the [`CONSOLE_TARGET`] target, so
/// `RUST_LOG=console=off` silences the page while keeping runner logs.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("aws_cli_sample", level);
    builder.filter_module(CONSOLE_TARGET, level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                // Page output reads like a browser console: the line alone
                if record.target() == CONSOLE_TARGET {
                    return writeln!(buf, "{}", record.args());
                }
                let level = match record.level() {
                    log::Level::Error => "ERROR".red(),
                    log::Level::Warn => "WARN".yellow(),
                    other => other.to_string().dimmed(),
                };
                writeln!(buf, "[{}] {}", level, record.args())
            });
        }
    }

    // try_init so a second call reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
