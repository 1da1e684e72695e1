//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed strings emitted or matched by the sample page
//! - The cache policy table
//! - CLI option types and parsing for the runner

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt};
