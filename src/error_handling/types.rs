//! Error type definitions.
//!
//! The page behaviors themselves never fail; these types cover the runner's
//! setup work (logger, loading the page from disk, parsing its location).

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for loading a page into an [`HtmlDocument`](crate::HtmlDocument).
#[derive(Error, Debug)]
pub enum PageError {
    /// The page file could not be read.
    #[error("Failed to read page {path}: {source}")]
    Read {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The page location is not a valid URL.
    #[error("Invalid page URL '{url}': {source}")]
    InvalidUrl {
        /// The rejected location
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_display_read() {
        let err = PageError::Read {
            path: "missing.html".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.html"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_page_error_display_invalid_url() {
        let err = PageError::InvalidUrl {
            url: "::".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert!(err.to_string().starts_with("Invalid page URL '::'"));
    }

    #[test]
    fn test_page_error_source_chain() {
        use std::error::Error as _;
        let source = url::Url::parse("not a url").unwrap_err();
        let err = PageError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.source().is_some());
    }
}
