//! Smooth scrolling for same-page links.

use std::rc::Rc;

use crate::config::FRAGMENT_ANCHOR_SELECTOR_STR;
use crate::document::{Document, Event, EventKind, ScrollOptions};

/// Makes every `<a href="#...">` present now scroll smoothly to its target
/// instead of jumping.
///
/// The click handler always suppresses the default navigation. The `href` is
/// used as a selector; when it matches nothing (or is not a valid selector,
/// like a bare `#`) the click does nothing else. Anchors added after this
/// call are not bound.
///
/// Returns the number of anchors bound.
pub fn init_smooth_scroll(document: &mut dyn Document) -> usize {
    let anchors = document.query_selector_all(FRAGMENT_ANCHOR_SELECTOR_STR);
    for &anchor in &anchors {
        document.add_event_listener(
            anchor,
            EventKind::Click,
            Rc::new(|document: &mut dyn Document, event: &mut Event| {
                event.prevent_default();
                let Some(href) = document.attribute(event.target(), "href") else {
                    return;
                };
                if let Some(target) = document.query_selector(&href) {
                    document.scroll_into_view(target, ScrollOptions::SMOOTH_START);
                }
            }),
        );
    }
    log::debug!("Bound smooth scroll to {} anchor(s)", anchors.len());
    anchors.len()
}
