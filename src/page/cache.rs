//! Cache strategy printer.

use crate::config::{CACHE_POLICIES, CACHE_STRATEGY_HEADER};
use crate::console::Console;

/// Logs the cache policy table: a header, then `  <type>: <policy>` per entry.
pub fn display_cache_info(console: &dyn Console) {
    console.log(CACHE_STRATEGY_HEADER);
    for (content_type, policy) in CACHE_POLICIES {
        console.log(&format!("  {}: {}", content_type, policy));
    }
}
