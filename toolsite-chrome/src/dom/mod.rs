//! Hosting-document model
//!
//! A minimal stand-in for the document a page host provides: ready
//! state, location, head and body containers, and the one-shot
//! content-parsed callback that drives deferred mounting. Components
//! receive a `Document` by reference, so a page harness, a test, or an
//! alternate mount point all use the same surface.

use std::fmt;

use crate::markup::Element;

type DeferredInit = Box<dyn FnOnce(&mut Document)>;

/// Document parse phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// The document is still being parsed
    Loading,
    /// Parsing has finished; subresources may still be loading
    Interactive,
    /// The document and its subresources have finished loading
    Complete,
}

impl ReadyState {
    /// Get the ready-state string the hosting environment reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Interactive => "interactive",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for ReadyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hosting location, reduced to the path component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path of the page being viewed
    pub path: String,
}

/// The live document a component mounts into
///
/// Holds the head's style elements and the body's top-level children.
/// Mutation happens only through the insertion methods, so every mount
/// is observable in [`Document::to_html`] output.
pub struct Document {
    ready_state: ReadyState,
    location: Location,
    styles: Vec<String>,
    body: Vec<Element>,
    deferred: Vec<DeferredInit>,
}

impl Document {
    /// Create a document that is still being parsed
    #[must_use]
    pub fn loading(path: impl Into<String>) -> Self {
        Self::with_state(ReadyState::Loading, path)
    }

    /// Create a document whose content has been parsed
    #[must_use]
    pub fn interactive(path: impl Into<String>) -> Self {
        Self::with_state(ReadyState::Interactive, path)
    }

    /// Create a fully loaded document
    #[must_use]
    pub fn complete(path: impl Into<String>) -> Self {
        Self::with_state(ReadyState::Complete, path)
    }

    fn with_state(ready_state: ReadyState, path: impl Into<String>) -> Self {
        Self {
            ready_state,
            location: Location { path: path.into() },
            styles: Vec::new(),
            body: Vec::new(),
            deferred: Vec::new(),
        }
    }

    /// Current parse phase
    #[must_use]
    pub const fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Current location
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Append a style element to the head
    pub fn append_style(&mut self, css: impl Into<String>) {
        self.styles.push(css.into());
    }

    /// Style element contents in head order
    #[must_use]
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Insert an element as the first child of the body
    pub fn prepend_body_child(&mut self, element: Element) {
        self.body.insert(0, element);
    }

    /// Append an element as the last child of the body
    pub fn append_body_child(&mut self, element: Element) {
        self.body.push(element);
    }

    /// Top-level body children in document order
    #[must_use]
    pub fn body_children(&self) -> &[Element] {
        &self.body
    }

    /// Whether any element in the body carries the given class
    #[must_use]
    pub fn body_has_class(&self, class: &str) -> bool {
        self.body.iter().any(|el| el.has_class(class))
    }

    /// Register a one-shot callback for the content-parsed event
    ///
    /// Callbacks fire exactly once, from [`Document::finish_parsing`].
    /// Registering after parsing has already finished never fires,
    /// matching the single-shot event this models.
    pub fn on_content_parsed(&mut self, callback: impl FnOnce(&mut Self) + 'static) {
        if self.ready_state == ReadyState::Loading {
            self.deferred.push(Box::new(callback));
        } else {
            tracing::trace!(
                ready_state = %self.ready_state,
                "Content already parsed, dropping late callback"
            );
        }
    }

    /// Mark the document content as parsed and fire deferred callbacks
    ///
    /// A no-op unless the document is still loading.
    pub fn finish_parsing(&mut self) {
        if self.ready_state != ReadyState::Loading {
            return;
        }
        self.ready_state = ReadyState::Interactive;
        let callbacks = std::mem::take(&mut self.deferred);
        tracing::trace!(callbacks = callbacks.len(), "Content parsed, firing deferred callbacks");
        for callback in callbacks {
            callback(self);
        }
    }

    /// Mark the document and its subresources as fully loaded
    pub fn finish_load(&mut self) {
        self.finish_parsing();
        self.ready_state = ReadyState::Complete;
    }

    /// Serialize the whole document to HTML
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(1024);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        for css in &self.styles {
            html.push_str("<style>");
            html.push_str(css);
            html.push_str("</style>\n");
        }
        html.push_str("</head>\n<body>\n");
        for child in &self.body {
            html.push_str(&child.to_html());
            html.push('\n');
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("ready_state", &self.ready_state)
            .field("location", &self.location)
            .field("styles", &self.styles.len())
            .field("body", &self.body.len())
            .field("deferred", &self.deferred.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_state_as_str() {
        assert_eq!(ReadyState::Loading.as_str(), "loading");
        assert_eq!(ReadyState::Interactive.as_str(), "interactive");
        assert_eq!(ReadyState::Complete.as_str(), "complete");
    }

    #[test]
    fn test_deferred_callback_fires_once_on_finish_parsing() {
        let mut doc = Document::loading("/index.html");
        doc.on_content_parsed(|d| d.append_style(".a{}"));

        assert!(doc.styles().is_empty());
        doc.finish_parsing();
        assert_eq!(doc.styles().len(), 1);
        assert_eq!(doc.ready_state(), ReadyState::Interactive);

        // A second transition has nothing left to fire.
        doc.finish_parsing();
        assert_eq!(doc.styles().len(), 1);
    }

    #[test]
    fn test_late_callback_never_fires() {
        let mut doc = Document::interactive("/index.html");
        doc.on_content_parsed(|d| d.append_style(".a{}"));
        doc.finish_load();
        assert!(doc.styles().is_empty());
    }

    #[test]
    fn test_finish_load_runs_pending_callbacks() {
        let mut doc = Document::loading("/index.html");
        doc.on_content_parsed(|d| d.append_style(".a{}"));
        doc.finish_load();
        assert_eq!(doc.styles().len(), 1);
        assert_eq!(doc.ready_state(), ReadyState::Complete);
    }

    #[test]
    fn test_body_insertion_order() {
        let mut doc = Document::complete("/index.html");
        doc.append_body_child(Element::new("main").class("content"));
        doc.prepend_body_child(Element::new("nav").class("bar"));
        doc.append_body_child(Element::new("footer").class("foot"));

        let classes: Vec<_> = doc
            .body_children()
            .iter()
            .map(|el| el.classes[0].as_str())
            .collect();
        assert_eq!(classes, ["bar", "content", "foot"]);
    }

    #[test]
    fn test_body_has_class_sees_nested_elements() {
        let mut doc = Document::complete("/index.html");
        doc.append_body_child(
            Element::new("div").child(Element::new("span").class("deep")),
        );
        assert!(doc.body_has_class("deep"));
        assert!(!doc.body_has_class("missing"));
    }

    #[test]
    fn test_to_html_layout() {
        let mut doc = Document::complete("/index.html");
        doc.append_style(".bar{color:red}");
        doc.append_body_child(Element::new("nav").class("bar"));

        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>.bar{color:red}</style>"));
        assert!(html.contains(r#"<nav class="bar"></nav>"#));
        let head_end = html.find("</head>").expect("head closes");
        let nav_at = html.find("<nav").expect("nav rendered");
        assert!(head_end < nav_at);
    }
}
