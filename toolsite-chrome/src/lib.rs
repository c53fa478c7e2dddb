//! toolsite-chrome: Shared page chrome for a static multi-page tool site
//!
//! Every page on the site carries the same two pieces of chrome: a top
//! navigation bar linking the site's tools and a footer pinned to the
//! bottom of the page. This crate renders both as typed markup plus a
//! stylesheet and mounts them into a hosting document exactly once per
//! page load.
//!
//! # Design Principles
//!
//! 1. **Pure Renderers**: markup and styles are plain functions of
//!    configuration and the current path; they never touch a document
//! 2. **Idempotent Mounting**: a marker-class check makes re-evaluation
//!    on the same document safe for both components
//! 3. **Injected Configuration**: the destination table is a value
//!    passed to the renderer, not an ambient global
//!
//! # Quick Start
//!
//! ```rust
//! use toolsite_chrome::prelude::*;
//!
//! // A page that has finished parsing mounts synchronously.
//! let mut doc = Document::complete("/tools/excel2json.html");
//! Navigation::default().install(&mut doc);
//! Footer::new().install(&mut doc);
//!
//! let html = doc.to_html();
//! assert!(html.contains("tool-navigation"));
//! assert!(html.contains("common-footer"));
//! ```
//!
//! A page still being parsed defers the mount until its content-parsed
//! event fires:
//!
//! ```rust
//! use toolsite_chrome::prelude::*;
//!
//! let mut doc = Document::loading("/index.html");
//! Navigation::default().install(&mut doc);
//! assert!(doc.body_children().is_empty());
//!
//! doc.finish_parsing();
//! assert!(doc.body_has_class(Navigation::MARKER_CLASS));
//! ```

pub mod component;
pub mod config;
pub mod dom;
pub mod error;
pub mod footer;
pub mod markup;
pub mod nav;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use toolsite_chrome::prelude::*;
    //! ```

    // Components
    pub use crate::footer::Footer;
    pub use crate::nav::Navigation;

    // Configuration
    pub use crate::config::{Destination, NavigationConfig};

    // Lifecycle
    pub use crate::component::{install, mount, Fragment, MountOutcome, Placement};

    // Hosting document
    pub use crate::dom::{Document, Location, ReadyState};

    // Markup construction
    pub use crate::markup::{Element, Node};

    // Error types
    pub use crate::error::ChromeError;
}
