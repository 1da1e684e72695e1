//! Hover logging for `.button` elements.

use std::rc::Rc;

use crate::config::{BUTTON_HOVERED_LABEL, BUTTON_SELECTOR_STR};
use crate::console::Console;
use crate::document::{Document, Event, EventKind};

/// Logs `Button hovered: <text>` every time a `.button` present now is hovered.
///
/// Returns the number of buttons bound.
pub fn init_button_interactions(document: &mut dyn Document, console: Rc<dyn Console>) -> usize {
    let buttons = document.query_selector_all(BUTTON_SELECTOR_STR);
    for &button in &buttons {
        let console = Rc::clone(&console);
        document.add_event_listener(
            button,
            EventKind::MouseEnter,
            Rc::new(move |document: &mut dyn Document, event: &mut Event| {
                let text = document.text_content(event.target());
                console.log_labeled(BUTTON_HOVERED_LABEL, text.trim());
            }),
        );
    }
    log::debug!("Bound hover logging to {} button(s)", buttons.len());
    buttons.len()
}
