//! Page initializer for the AWS CLI component sample.
//!
//! Once the document is ready, [`initialize`] runs the page behaviors in a
//! fixed order:
//! 1. deployment info (timestamp and "powered by" line)
//! 2. smooth scrolling for same-page links
//! 3. hover logging for `.button` elements
//! 4. deployment environment detection
//! 5. cache strategy table
//!
//! and finally tags `<body>` with `js-loaded`. [`start`] wires that through
//! [`on_ready`] and hands back the [`SampleInfo`] diagnostic value.

mod buttons;
mod cache;
mod deployment;
mod environment;
mod scroll;

use std::rc::Rc;

use chrono::Utc;
use serde::Serialize;

use crate::config::{
    INITIALIZED_MESSAGE, LOADED_CLASS, SAMPLE_COMPONENT, SAMPLE_VARIANT, SAMPLE_VERSION,
};
use crate::console::Console;
use crate::document::{Document, ReadyState};

pub use buttons::init_button_interactions;
pub use cache::display_cache_info;
pub use deployment::{display_deployment_info, iso_timestamp};
pub use environment::{classify_hostname, detect_deployment_environment, Environment};
pub use scroll::init_smooth_scroll;

/// Diagnostic description of the sample, available to callers after [`start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleInfo {
    pub version: &'static str,
    pub component: &'static str,
    pub variant: &'static str,
}

impl SampleInfo {
    pub const fn new() -> Self {
        Self {
            version: SAMPLE_VERSION,
            component: SAMPLE_COMPONENT,
            variant: SAMPLE_VARIANT,
        }
    }

    /// Re-runs environment detection against `document`, logging the result.
    pub fn get_environment(&self, document: &dyn Document, console: &dyn Console) -> Environment {
        detect_deployment_environment(document, console)
    }
}

impl Default for SampleInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// What a run of [`initialize`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitSummary {
    pub anchors_bound: usize,
    pub buttons_bound: usize,
    pub environment: Environment,
}

/// Runs `callback` now if the document has finished parsing, otherwise once
/// when it does.
pub fn on_ready<F>(document: &mut dyn Document, callback: F)
where
    F: FnOnce(&mut dyn Document) + 'static,
{
    if document.ready_state() == ReadyState::Loading {
        log::debug!("Document still loading, deferring initialization");
        document.add_ready_listener(Box::new(callback));
    } else {
        callback(document);
    }
}

/// Runs every page behavior in order, then adds `js-loaded` to `<body>`.
///
/// Nothing here can fail: a page without links or buttons just binds nothing.
/// Calling it again binds the current elements a second time, but `<body>`
/// still carries `js-loaded` only once.
pub fn initialize(document: &mut dyn Document, console: Rc<dyn Console>) -> InitSummary {
    console.log(INITIALIZED_MESSAGE);
    display_deployment_info(console.as_ref(), Utc::now());
    let anchors_bound = init_smooth_scroll(document);
    let buttons_bound = init_button_interactions(document, Rc::clone(&console));
    let environment = detect_deployment_environment(document, console.as_ref());
    display_cache_info(console.as_ref());

    document.add_body_class(LOADED_CLASS);

    InitSummary {
        anchors_bound,
        buttons_bound,
        environment,
    }
}

/// Schedules [`initialize`] for when the document is ready and returns the
/// sample's diagnostic info.
pub fn start(document: &mut dyn Document, console: Rc<dyn Console>) -> SampleInfo {
    on_ready(document, move |document| {
        let summary = initialize(document, console);
        log::debug!(
            "Sample initialized: {} anchor(s), {} button(s), environment {}",
            summary.anchors_bound,
            summary.buttons_bound,
            summary.environment
        );
    });
    SampleInfo::new()
}
