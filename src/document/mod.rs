//! Document abstraction the page script runs against.
//!
//! The page script only needs a handful of browser capabilities: querying
//! elements, reading their attributes and text, registering listeners,
//! scrolling, reading the hostname, and tagging `<body>` with a class.
//! [`Document`] is that capability set. [`HtmlDocument`] implements it over a
//! parsed HTML page and simulates the browser event loop.
//!
//! Execution is single-threaded: handlers are `Rc` closures owned by the
//! document and receive mutable access to it when dispatched.

mod html;

use std::rc::Rc;

use clap::ValueEnum;
use serde::Serialize;
use strum_macros::{AsRefStr, Display};

pub use html::HtmlDocument;

/// Opaque reference to an element of a document.
///
/// Handles are only meaningful for the document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementHandle(pub usize);

/// Loading state of a document, mirroring `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ReadyState {
    /// Still parsing; the ready signal has not fired yet
    Loading,
    /// Parsed; the ready signal has fired
    Interactive,
    /// Parsed and all subresources loaded
    Complete,
}

/// Events the page script listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EventKind {
    Click,
    MouseEnter,
}

/// A dispatched event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    target: ElementHandle,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: ElementHandle) -> Self {
        Self {
            kind,
            target,
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Element the event was dispatched to.
    pub fn target(&self) -> ElementHandle {
        self.target
    }

    /// Suppresses the element's default action (e.g. following a link).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// How a scroll is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// Which edge of the target aligns with the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

/// Options for [`Document::scroll_into_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollOptions {
    /// Animated scroll with the target's top at the viewport's top.
    pub const SMOOTH_START: ScrollOptions = ScrollOptions {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Start,
    };
}

/// A recorded scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub target: ElementHandle,
    pub options: ScrollOptions,
}

/// Listener for element events.
pub type EventHandler = Rc<dyn Fn(&mut dyn Document, &mut Event)>;

/// One-shot listener for the ready signal.
pub type ReadyHandler = Box<dyn FnOnce(&mut dyn Document)>;

/// Browser capabilities used by the page script.
///
/// Selectors are CSS selector strings. A selector that does not parse matches
/// nothing rather than failing.
pub trait Document {
    fn ready_state(&self) -> ReadyState;

    /// All elements matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<ElementHandle>;

    /// First element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<ElementHandle> {
        self.query_selector_all(selector).into_iter().next()
    }

    fn attribute(&self, element: ElementHandle, name: &str) -> Option<String>;

    /// Concatenated text of the element and its descendants, untrimmed.
    fn text_content(&self, element: ElementHandle) -> String;

    fn add_event_listener(&mut self, element: ElementHandle, kind: EventKind, handler: EventHandler);

    /// Registers a listener fired at most once, when loading finishes.
    fn add_ready_listener(&mut self, handler: ReadyHandler);

    fn scroll_into_view(&mut self, element: ElementHandle, options: ScrollOptions);

    /// Hostname of the page location (`window.location.hostname`).
    fn hostname(&self) -> &str;

    /// Adds a class to `<body>`. Adding a class already present is a no-op.
    fn add_body_class(&mut self, class: &str);

    fn has_body_class(&self, class: &str) -> bool;
}
