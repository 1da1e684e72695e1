//! Error handling.
//!
//! This module provides the error types used by the runner:
//! - `InitializationError` for logger setup
//! - `PageError` for loading a page and resolving its location

mod types;

// Re-export public API
pub use types::{InitializationError, PageError};
