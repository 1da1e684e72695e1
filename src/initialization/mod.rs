//! Runner initialization.
//!
//! This module provides setup for the shared resources the runner needs
//! before the page script starts: the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
