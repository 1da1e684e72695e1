//! Deployment info printer.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::{DEPLOYED_AT_LABEL, POWERED_BY_MESSAGE};
use crate::console::Console;

/// Formats `instant` the way a browser's `Date.toISOString()` does
/// (millisecond precision, `Z` suffix).
pub fn iso_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Logs when the sample was deployed and what deployed it.
pub fn display_deployment_info(console: &dyn Console, now: DateTime<Utc>) {
    console.log_labeled(DEPLOYED_AT_LABEL, &iso_timestamp(now));
    console.log(POWERED_BY_MESSAGE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp_matches_browser_format() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 5).unwrap();
        assert_eq!(iso_timestamp(instant), "2026-10-16T08:30:05.000Z");
    }

    #[test]
    fn test_display_deployment_info_lines() {
        let console = MemoryConsole::new();
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        display_deployment_info(&console, instant);
        assert_eq!(
            console.lines(),
            vec![
                "Sample deployed at: 2024-01-02T03:04:05.000Z",
                "Powered by: to-be-continuous AWS CLI component",
            ]
        );
    }
}
