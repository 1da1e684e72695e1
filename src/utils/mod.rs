//! Shared helpers.

mod selector;

pub use selector::{parse_page_selector, parse_selector_unsafe};
