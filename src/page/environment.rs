//! Deployment environment detection from the page hostname.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::config::{
    CLOUDFRONT_HOST_MARKER, ENVIRONMENT_LABEL, LOCAL_HOSTNAMES, S3_BUCKET_HOST_MARKER,
    S3_WEBSITE_HOST_MARKER,
};
use crate::console::Console;
use crate::document::Document;

/// Where the page appears to be served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize)]
pub enum Environment {
    #[strum(serialize = "CloudFront")]
    #[serde(rename = "CloudFront")]
    CloudFront,
    #[strum(serialize = "S3 Static Website")]
    #[serde(rename = "S3 Static Website")]
    S3StaticWebsite,
    #[strum(serialize = "Local Development")]
    #[serde(rename = "Local Development")]
    LocalDevelopment,
    #[strum(serialize = "Unknown")]
    #[serde(rename = "Unknown")]
    Unknown,
}

/// Classifies a hostname. Checks run in order and the first match wins, so a
/// hostname mentioning both CloudFront and S3 is reported as CloudFront.
///
/// The CloudFront and S3 checks are substring matches; the local check is an
/// exact match.
pub fn classify_hostname(hostname: &str) -> Environment {
    if hostname.contains(CLOUDFRONT_HOST_MARKER) {
        Environment::CloudFront
    } else if hostname.contains(S3_WEBSITE_HOST_MARKER) || hostname.contains(S3_BUCKET_HOST_MARKER)
    {
        Environment::S3StaticWebsite
    } else if LOCAL_HOSTNAMES.contains(&hostname) {
        Environment::LocalDevelopment
    } else {
        Environment::Unknown
    }
}

/// Classifies the document's hostname and logs the result.
pub fn detect_deployment_environment(document: &dyn Document, console: &dyn Console) -> Environment {
    let environment = classify_hostname(document.hostname());
    console.log_labeled(ENVIRONMENT_LABEL, environment.as_ref());
    environment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use crate::document::HtmlDocument;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cloudfront_anywhere_in_hostname() {
        assert_eq!(
            classify_hostname("d111111abcdef8.cloudfront.net"),
            Environment::CloudFront
        );
        assert_eq!(
            classify_hostname("cloudfront.net.example.org"),
            Environment::CloudFront
        );
    }

    #[test]
    fn test_cloudfront_takes_precedence_over_s3() {
        assert_eq!(
            classify_hostname("bucket.s3-website.cloudfront.net"),
            Environment::CloudFront
        );
        assert_eq!(
            classify_hostname("cloudfront.net.s3.amazonaws.com"),
            Environment::CloudFront
        );
    }

    #[test]
    fn test_s3_hostnames() {
        assert_eq!(
            classify_hostname("s3-website.example.com"),
            Environment::S3StaticWebsite
        );
        assert_eq!(
            classify_hostname("bucket.s3.amazonaws.com"),
            Environment::S3StaticWebsite
        );
        assert_eq!(
            classify_hostname("my-bucket.s3-website-eu-west-1.amazonaws.com"),
            Environment::S3StaticWebsite
        );
    }

    #[test]
    fn test_local_hostnames_are_exact() {
        assert_eq!(classify_hostname("localhost"), Environment::LocalDevelopment);
        assert_eq!(classify_hostname("127.0.0.1"), Environment::LocalDevelopment);
        assert_eq!(classify_hostname("127.0.0.1.evil.com"), Environment::Unknown);
        assert_eq!(classify_hostname("localhost.localdomain"), Environment::Unknown);
    }

    #[test]
    fn test_everything_else_is_unknown() {
        assert_eq!(classify_hostname("example.com"), Environment::Unknown);
        assert_eq!(classify_hostname(""), Environment::Unknown);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = Environment::iter().map(|e| e.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "CloudFront",
                "S3 Static Website",
                "Local Development",
                "Unknown"
            ]
        );
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Environment::S3StaticWebsite).unwrap(),
            "\"S3 Static Website\""
        );
    }

    #[test]
    fn test_detect_logs_and_returns() {
        let doc = HtmlDocument::parse("<p></p>", "http://127.0.0.1:8080/").unwrap();
        let console = MemoryConsole::new();
        let environment = detect_deployment_environment(&doc, &console);
        assert_eq!(environment, Environment::LocalDevelopment);
        assert_eq!(
            console.lines(),
            vec!["Deployment Environment: Local Development"]
        );
    }
}
