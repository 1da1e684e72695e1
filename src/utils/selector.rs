//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a selector that comes from page content (e.g. an anchor's `href`).
///
/// Page content is untrusted: a bare `#` or `#1st-section` is not a valid
/// selector. Those resolve to `None`, and callers treat that the same as a
/// selector that matches nothing.
pub fn parse_page_selector(selector_str: &str) -> Option<Selector> {
    match Selector::parse(selector_str) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::trace!("Ignoring unparsable selector '{}': {}", selector_str, e);
            None
        }
    }
}

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
