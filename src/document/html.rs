//! [`Document`] implementation over a parsed HTML page.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{
    Document, ElementHandle, Event, EventHandler, EventKind, ReadyHandler, ReadyState,
    ScrollOptions, ScrollRequest,
};
use crate::error_handling::PageError;
use crate::utils::{parse_page_selector, parse_selector_unsafe};

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("body", "body class lookup"));

/// A static page loaded from HTML, with a simulated event loop.
///
/// Elements are addressed by their position in document order. Event
/// listeners, scroll requests, followed links and `<body>` classes are kept
/// alongside the parsed tree, which itself is never mutated.
pub struct HtmlDocument {
    html: Html,
    url: Url,
    hostname: String,
    ready_state: ReadyState,
    elements: Vec<NodeId>,
    handles: HashMap<NodeId, ElementHandle>,
    listeners: HashMap<(ElementHandle, EventKind), Vec<EventHandler>>,
    ready_listeners: Vec<ReadyHandler>,
    body_classes: Vec<String>,
    scroll_requests: Vec<ScrollRequest>,
    navigations: Vec<String>,
}

impl HtmlDocument {
    /// Parses `source` as a page served from `url`.
    ///
    /// The document starts in [`ReadyState::Loading`], as it would be while a
    /// synchronous script in the page runs.
    ///
    /// # Errors
    ///
    /// Returns `PageError::InvalidUrl` if `url` does not parse. A location
    /// without a host (e.g. `file:///srv/www/index.html`) loads with an empty
    /// hostname, like `location.hostname` in a browser.
    pub fn parse(source: &str, url: &str) -> Result<Self, PageError> {
        let parsed = Url::parse(url).map_err(|source| PageError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let hostname = parsed.host_str().unwrap_or("").to_string();

        let html = Html::parse_document(source);
        let elements: Vec<NodeId> = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(|element| element.id())
            .collect();
        let handles: HashMap<NodeId, ElementHandle> = elements
            .iter()
            .enumerate()
            .map(|(index, id)| (*id, ElementHandle(index)))
            .collect();

        let body_classes: Vec<String> = html
            .select(&BODY_SELECTOR)
            .next()
            .map(|body| body.value().classes().map(str::to_string).collect())
            .unwrap_or_default();

        log::debug!(
            "Parsed page for {} ({} elements)",
            hostname,
            elements.len()
        );

        Ok(Self {
            html,
            url: parsed,
            hostname,
            ready_state: ReadyState::Loading,
            elements,
            handles,
            listeners: HashMap::new(),
            ready_listeners: Vec::new(),
            body_classes,
            scroll_requests: Vec::new(),
            navigations: Vec::new(),
        })
    }

    /// Reads and parses the page at `path`.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Read` if the file cannot be read, otherwise the
    /// same errors as [`HtmlDocument::parse`].
    pub fn from_file(path: &Path, url: &str) -> Result<Self, PageError> {
        let source = std::fs::read_to_string(path).map_err(|source| PageError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&source, url)
    }

    /// Overrides the initial ready state.
    pub fn with_ready_state(mut self, state: ReadyState) -> Self {
        self.ready_state = state;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Finishes parsing: moves to [`ReadyState::Interactive`] and fires the
    /// ready listeners.
    ///
    /// Listeners fire at most once; calling this again, or on a document that
    /// was never loading, does nothing.
    pub fn finish_loading(&mut self) {
        if self.ready_state != ReadyState::Loading {
            return;
        }
        self.ready_state = ReadyState::Interactive;
        let listeners = std::mem::take(&mut self.ready_listeners);
        log::debug!("Document ready, firing {} listener(s)", listeners.len());
        for listener in listeners {
            listener(&mut *self);
        }
    }

    /// Dispatches a click to `element`.
    ///
    /// If no listener prevented the default action and the element is a link,
    /// the link is followed (recorded in [`HtmlDocument::navigations`]).
    pub fn click(&mut self, element: ElementHandle) -> Event {
        let event = self.dispatch(element, EventKind::Click);
        if !event.default_prevented() && self.tag_name(element).as_deref() == Some("a") {
            if let Some(href) = self.attribute(element, "href") {
                log::debug!("Following link {}", href);
                self.navigations.push(href);
            }
        }
        event
    }

    /// Dispatches a pointer hover (`mouseenter`) to `element`.
    pub fn hover(&mut self, element: ElementHandle) -> Event {
        self.dispatch(element, EventKind::MouseEnter)
    }

    /// Lowercase tag name of `element`.
    pub fn tag_name(&self, element: ElementHandle) -> Option<String> {
        self.element(element)
            .map(|element| element.value().name().to_string())
    }

    /// Number of listeners registered for `kind` on `element`.
    pub fn listener_count(&self, element: ElementHandle, kind: EventKind) -> usize {
        self.listeners
            .get(&(element, kind))
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Scroll requests in the order they were made.
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    /// Element most recently scrolled into view.
    pub fn scroll_target(&self) -> Option<ElementHandle> {
        self.scroll_requests.last().map(|request| request.target)
    }

    /// Links followed by default click actions.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn body_classes(&self) -> &[String] {
        &self.body_classes
    }

    fn element(&self, handle: ElementHandle) -> Option<ElementRef<'_>> {
        let id = *self.elements.get(handle.0)?;
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }

    fn dispatch(&mut self, target: ElementHandle, kind: EventKind) -> Event {
        // Clone the list so handlers can register listeners while running
        let handlers = self
            .listeners
            .get(&(target, kind))
            .cloned()
            .unwrap_or_default();
        let mut event = Event::new(kind, target);
        for handler in handlers {
            handler(&mut *self, &mut event);
        }
        event
    }
}

impl Document for HtmlDocument {
    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ElementHandle> {
        let Some(selector) = parse_page_selector(selector) else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .filter_map(|element| self.handles.get(&element.id()).copied())
            .collect()
    }

    fn attribute(&self, element: ElementHandle, name: &str) -> Option<String> {
        self.element(element)?
            .value()
            .attr(name)
            .map(str::to_string)
    }

    fn text_content(&self, element: ElementHandle) -> String {
        self.element(element)
            .map(|element| element.text().collect())
            .unwrap_or_default()
    }

    fn add_event_listener(&mut self, element: ElementHandle, kind: EventKind, handler: EventHandler) {
        self.listeners
            .entry((element, kind))
            .or_default()
            .push(handler);
    }

    fn add_ready_listener(&mut self, handler: ReadyHandler) {
        self.ready_listeners.push(handler);
    }

    fn scroll_into_view(&mut self, element: ElementHandle, options: ScrollOptions) {
        log::trace!(
            "Scrolling element {} into view ({}, {})",
            element.0,
            options.behavior,
            options.block
        );
        self.scroll_requests.push(ScrollRequest {
            target: element,
            options,
        });
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn add_body_class(&mut self, class: &str) {
        if !self.has_body_class(class) {
            self.body_classes.push(class.to_string());
        }
    }

    fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.iter().any(|existing| existing == class)
    }
}
