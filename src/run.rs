//! Runner: loads a page from disk and drives the sample against it.

use std::rc::Rc;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;

use crate::config::{Opt, BUTTON_SELECTOR_STR};
use crate::console::{Console, LogConsole, MemoryConsole, TeeConsole};
use crate::document::{Document, HtmlDocument, ScrollRequest};
use crate::page::{start, Environment, SampleInfo};

/// Results of a sample run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Diagnostic info returned by the page initializer
    pub sample: SampleInfo,
    /// Environment reported by an on-demand detection after the interactions
    pub environment: Environment,
    /// Every line the page printed, in order
    pub console: Vec<String>,
    /// Scroll requests made by link clicks
    pub scroll_requests: Vec<ScrollRequest>,
    /// Links followed by default click actions
    pub navigations: Vec<String>,
    /// Classes on `<body>` at the end of the run
    pub body_classes: Vec<String>,
}

/// Runs the sample page script against the page described by `opt`.
///
/// The page is loaded in the requested ready state, the initializer is
/// started, loading is completed (firing the ready signal if it was deferred),
/// and the requested hovers and clicks are replayed.
///
/// # Errors
///
/// Returns an error if the page cannot be read or its URL is invalid.
pub fn run_sample(opt: &Opt) -> Result<RunReport> {
    let mut document = HtmlDocument::from_file(&opt.page, &opt.url)
        .with_context(|| format!("Failed to load page {}", opt.page.display()))?
        .with_ready_state(opt.ready_state);
    info!(
        "Loaded {} as {} (ready state: {})",
        opt.page.display(),
        document.url(),
        opt.ready_state
    );

    let transcript = Rc::new(MemoryConsole::new());
    let console: Rc<dyn Console> = Rc::new(TeeConsole::new(LogConsole, Rc::clone(&transcript)));

    let sample = start(&mut document, Rc::clone(&console));
    document.finish_loading();

    if opt.hover_buttons {
        for button in document.query_selector_all(BUTTON_SELECTOR_STR) {
            document.hover(button);
        }
    }

    for href in &opt.clicks {
        match find_link(&document, href) {
            Some(anchor) => {
                document.click(anchor);
            }
            None => warn!("No link with href '{}' on the page", href),
        }
    }

    let environment = sample.get_environment(&document, console.as_ref());

    Ok(RunReport {
        sample,
        environment,
        console: transcript.lines(),
        scroll_requests: document.scroll_requests().to_vec(),
        navigations: document.navigations().to_vec(),
        body_classes: document.body_classes().to_vec(),
    })
}

fn find_link(document: &HtmlDocument, href: &str) -> Option<crate::document::ElementHandle> {
    document
        .query_selector_all("a[href]")
        .into_iter()
        .find(|&anchor| document.attribute(anchor, "href").as_deref() == Some(href))
}
