//! Top navigation bar component
//!
//! Renders a sticky bar with a home link, a divider, and one link per
//! configured destination, marking the entry whose path matches the
//! current location as active. The renderers are pure; mounting goes
//! through the shared component lifecycle.

use crate::component::{self, Fragment, MountOutcome, Placement};
use crate::config::NavigationConfig;
use crate::dom::Document;
use crate::markup::Element;

/// The navigation bar and the configuration it renders from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    config: NavigationConfig,
}

impl Navigation {
    /// Class marking a mounted navigation bar
    pub const MARKER_CLASS: &'static str = "tool-navigation";

    /// Create a navigation bar over the given configuration
    #[must_use]
    pub const fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    /// The configuration this bar renders from
    #[must_use]
    pub const fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Build the navigation markup tree for the current location path
    ///
    /// The home link is always present and never active; destinations
    /// follow in configuration order, each carrying its icon, label,
    /// tooltip, and the active marker when the current path contains
    /// its path.
    #[must_use]
    pub fn markup(&self, current_path: &str) -> Element {
        let mut tools = Element::new("div").class("nav-tools");
        for dest in &self.config.destinations {
            tools = tools.child(
                Element::new("a")
                    .class("nav-item")
                    .class_if("active", dest.is_active(current_path))
                    .attr("href", dest.path.as_str())
                    .attr("title", dest.description.as_str())
                    .child(Element::new("span").class("nav-icon").text(dest.icon.as_str()))
                    .child(Element::new("span").class("nav-text").text(dest.name.as_str())),
            );
        }

        Element::new("nav").class(Self::MARKER_CLASS).child(
            Element::new("div")
                .class("nav-container")
                .child(
                    Element::new("a")
                        .class("nav-home")
                        .attr("href", self.config.home_path.as_str())
                        .attr("title", "Back to home")
                        .child(Element::new("span").class("nav-icon").text("🏠"))
                        .child(Element::new("span").class("nav-text").text("Home")),
                )
                .child(Element::new("div").class("nav-divider"))
                .child(tools),
        )
    }

    /// Render the navigation bar to an HTML string
    #[must_use]
    pub fn render_html(&self, current_path: &str) -> String {
        self.markup(current_path).to_html()
    }

    /// The navigation stylesheet
    #[must_use]
    pub const fn render_styles() -> &'static str {
        STYLES
    }

    /// Mount into the document once, skipping when already present
    pub fn mount(&self, doc: &mut Document) -> MountOutcome {
        component::mount(doc, self)
    }

    /// Mount now, or once the document's content has been parsed
    pub fn install(self, doc: &mut Document) {
        component::install(doc, self);
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

impl Fragment for Navigation {
    fn marker_class(&self) -> &'static str {
        Self::MARKER_CLASS
    }

    fn placement(&self) -> Placement {
        Placement::BodyStart
    }

    fn markup(&self, current_path: &str) -> Element {
        self.markup(current_path)
    }

    fn styles(&self) -> &'static str {
        Self::render_styles()
    }
}

/// Install a navigation bar over the shared configuration
///
/// Convenience entry point for pages that want the one-line setup.
pub fn install(doc: &mut Document) {
    Navigation::new(NavigationConfig::shared().clone()).install(doc);
}

const STYLES: &str = r"
.tool-navigation {
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(10px);
  border-bottom: 1px solid rgba(0, 0, 0, 0.1);
  position: sticky;
  top: 0;
  z-index: 1000;
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
  display: flex;
  align-items: center;
  gap: 20px;
  height: 60px;
}

.nav-home {
  display: flex;
  align-items: center;
  gap: 8px;
  padding: 8px 16px;
  border-radius: 8px;
  text-decoration: none;
  color: #667eea;
  font-weight: 600;
  transition: all 0.3s ease;
  background: rgba(102, 126, 234, 0.1);
}

.nav-home:hover {
  background: rgba(102, 126, 234, 0.2);
  transform: translateY(-1px);
}

.nav-divider {
  width: 1px;
  height: 30px;
  background: rgba(0, 0, 0, 0.1);
}

.nav-tools {
  display: flex;
  gap: 10px;
  flex: 1;
}

.nav-item {
  display: flex;
  align-items: center;
  gap: 8px;
  padding: 8px 16px;
  border-radius: 8px;
  text-decoration: none;
  color: #666;
  font-weight: 500;
  transition: all 0.3s ease;
  position: relative;
}

.nav-item:hover {
  color: #667eea;
  background: rgba(102, 126, 234, 0.1);
  transform: translateY(-1px);
}

.nav-item.active {
  color: #667eea;
  background: rgba(102, 126, 234, 0.15);
  font-weight: 600;
}

.nav-item.active::after {
  content: '';
  position: absolute;
  bottom: -1px;
  left: 50%;
  transform: translateX(-50%);
  width: 80%;
  height: 2px;
  background: #667eea;
  border-radius: 1px;
}

.nav-icon {
  font-size: 1.2rem;
}

.nav-text {
  font-size: 0.9rem;
}

@media (max-width: 768px) {
  .nav-container {
    padding: 0 15px;
    height: 50px;
  }

  .nav-text {
    display: none;
  }

  .nav-item, .nav-home {
    padding: 8px 12px;
  }

  .nav-icon {
    font-size: 1.1rem;
  }
}

@media (max-width: 480px) {
  .nav-container {
    padding: 0 10px;
    gap: 10px;
  }

  .nav-tools {
    gap: 6px;
  }

  .nav-item, .nav-home {
    padding: 6px 10px;
  }
}
";
