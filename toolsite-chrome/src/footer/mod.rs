//! Page footer component
//!
//! A fixed bar pinned to the bottom of every page. The fragment is
//! fully static; the stylesheet pads the body so page content is never
//! hidden behind the bar.

use crate::component::{self, Fragment, MountOutcome, Placement};
use crate::dom::Document;
use crate::markup::Element;

const FOOTER_TEXT: &str = "toolsite · free in-browser file utilities";

/// The site footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Footer;

impl Footer {
    /// Class marking a mounted footer
    pub const MARKER_CLASS: &'static str = "common-footer";

    /// Create the footer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build the footer markup tree
    #[must_use]
    pub fn markup() -> Element {
        Element::new("footer").class(Self::MARKER_CLASS).child(
            Element::new("div")
                .class("footer-content")
                .child(Element::new("p").text(FOOTER_TEXT)),
        )
    }

    /// Render the footer to an HTML string
    #[must_use]
    pub fn render_html() -> String {
        Self::markup().to_html()
    }

    /// The footer stylesheet
    #[must_use]
    pub const fn render_styles() -> &'static str {
        STYLES
    }

    /// Mount into the document once, skipping when already present
    pub fn mount(self, doc: &mut Document) -> MountOutcome {
        component::mount(doc, &self)
    }

    /// Mount now, or once the document's content has been parsed
    pub fn install(self, doc: &mut Document) {
        component::install(doc, self);
    }
}

impl Fragment for Footer {
    fn marker_class(&self) -> &'static str {
        Self::MARKER_CLASS
    }

    fn placement(&self) -> Placement {
        Placement::BodyEnd
    }

    fn markup(&self, _current_path: &str) -> Element {
        Self::markup()
    }

    fn styles(&self) -> &'static str {
        Self::render_styles()
    }
}

/// Install the footer
///
/// Convenience entry point for pages that want the one-line setup.
pub fn install(doc: &mut Document) {
    Footer::new().install(doc);
}

const STYLES: &str = r"
.common-footer {
  background: rgba(0, 0, 0, 0.8);
  color: white;
  text-align: center;
  padding: 15px 0;
  position: fixed;
  bottom: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  backdrop-filter: blur(10px);
  border-top: 1px solid rgba(255, 255, 255, 0.1);
}

.footer-content {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
}

.footer-content p {
  margin: 0;
  font-size: 14px;
  opacity: 0.9;
}

body {
  padding-bottom: 50px !important;
}

@media (max-width: 768px) {
  .footer-content p {
    font-size: 12px;
  }

  .common-footer {
    padding: 10px 0;
  }

  body {
    padding-bottom: 40px !important;
  }
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_carries_marker_and_text() {
        let html = Footer::render_html();
        assert!(html.contains(r#"<footer class="common-footer">"#));
        assert!(html.contains(r#"<div class="footer-content">"#));
        assert!(html.contains(FOOTER_TEXT));
    }

    #[test]
    fn test_mount_appends_as_last_body_child() {
        let mut doc = Document::complete("/index.html");
        doc.append_body_child(Element::new("main").class("content"));
        Footer::new().mount(&mut doc);

        let last = doc.body_children().last().expect("body not empty");
        assert_eq!(last.classes, [Footer::MARKER_CLASS]);
    }

    #[test]
    fn test_double_install_keeps_one_footer() {
        let mut doc = Document::complete("/index.html");
        Footer::new().install(&mut doc);
        Footer::new().install(&mut doc);

        let footers = doc
            .body_children()
            .iter()
            .filter(|el| el.has_class(Footer::MARKER_CLASS))
            .count();
        assert_eq!(footers, 1);
        assert_eq!(doc.styles().len(), 1);
    }

    #[test]
    fn test_styles_pad_body_for_fixed_bar() {
        let css = Footer::render_styles();
        assert!(css.contains(".common-footer"));
        assert!(css.contains("position: fixed"));
        assert!(css.contains("padding-bottom: 50px !important"));
        assert!(css.contains("@media (max-width: 768px)"));
    }
}
