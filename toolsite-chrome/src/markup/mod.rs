//! Typed markup construction and serialization
//!
//! Chrome fragments are assembled as trees of element descriptors and
//! serialized to HTML with escaping applied at the serialization
//! boundary, so structure and quoting are enforced by the types rather
//! than by string concatenation at each call site.

/// A node in a markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element
    Element(Element),
    /// Text content, escaped on serialization
    Text(String),
}

/// An element descriptor with classes, attributes, and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name
    pub tag: &'static str,
    /// CSS classes, serialized as a single space-joined `class` attribute
    pub classes: Vec<String>,
    /// Attributes in insertion order
    pub attrs: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no classes, attributes, or children
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a CSS class
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a CSS class only when `condition` holds
    #[must_use]
    pub fn class_if(self, class: impl Into<String>, condition: bool) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    /// Add an attribute
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a child element
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a text child
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Whether the element or any descendant carries the given class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        if self.classes.iter().any(|c| c == class) {
            return true;
        }
        self.children.iter().any(|child| match child {
            Node::Element(el) => el.has_class(class),
            Node::Text(_) => false,
        })
    }

    /// Serialize the element and its subtree to an HTML string
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(256);
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        html.push('<');
        html.push_str(self.tag);
        if !self.classes.is_empty() {
            write_attr(html, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attrs {
            write_attr(html, name, value);
        }
        html.push('>');
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(html),
                Node::Text(text) => html.push_str(&escape_html(text)),
            }
        }
        html.push_str("</");
        html.push_str(self.tag);
        html.push('>');
    }
}

fn write_attr(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    html.push_str(&escape_attr(value));
    html.push('"');
}

/// Escape a string for use in HTML attribute values
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use in HTML content
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
