//! Configuration constants.
//!
//! This module defines every fixed string the sample page emits or matches on:
//! console messages, selectors, the sample info fields, and the cache policy table.

// Sample info (exposed to callers after initialization)
pub const SAMPLE_VERSION: &str = "1.0.0";
pub const SAMPLE_COMPONENT: &str = "to-be-continuous/awscli";
pub const SAMPLE_VARIANT: &str = "OIDC";

// Console messages
pub const INITIALIZED_MESSAGE: &str = "🚀 AWS CLI Component Sample Initialized";
pub const DEPLOYED_AT_LABEL: &str = "Sample deployed at:";
pub const POWERED_BY_MESSAGE: &str = "Powered by: to-be-continuous AWS CLI component";
pub const BUTTON_HOVERED_LABEL: &str = "Button hovered:";
pub const ENVIRONMENT_LABEL: &str = "Deployment Environment:";
pub const CACHE_STRATEGY_HEADER: &str = "Cache Strategy:";

// CSS selector strings
pub const FRAGMENT_ANCHOR_SELECTOR_STR: &str = "a[href^='#']";
pub const BUTTON_SELECTOR_STR: &str = ".button";

/// Log target carrying page console output.
pub const CONSOLE_TARGET: &str = "console";

/// Class added to `<body>` once initialization has run.
pub const LOADED_CLASS: &str = "js-loaded";

// Hostname markers, checked in this order by the environment detector
pub const CLOUDFRONT_HOST_MARKER: &str = "cloudfront.net";
pub const S3_WEBSITE_HOST_MARKER: &str = "s3-website";
pub const S3_BUCKET_HOST_MARKER: &str = "s3.amazonaws.com";
pub const LOCAL_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

/// Content-type to caching policy descriptions, in display order.
///
/// Informational only: the real cache headers are set by the deployment
/// pipeline when objects are uploaded.
pub const CACHE_POLICIES: [(&str, &str); 4] = [
    ("text/html", "HTML files cached with no-cache strategy"),
    ("text/css", "CSS files cached for 1 year (immutable)"),
    (
        "application/javascript",
        "JS files cached for 1 year (immutable)",
    ),
    ("image/", "Images cached for 30 days"),
];

/// Page location used by the runner when `--url` is not given.
pub const DEFAULT_PAGE_URL: &str = "http://localhost/index.html";
