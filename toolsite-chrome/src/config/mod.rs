//! Navigation configuration
//!
//! The destination table and home path behind the navigation bar.
//! A compiled-in table covers the common deployment; a TOML file and
//! `CHROME_`-prefixed environment variables can override it with clear
//! precedence:
//!
//! 1. Environment variables (highest priority, `CHROME_` prefix)
//! 2. The given `chrome.toml`
//! 3. Compiled-in defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # chrome.toml
//! home_path = "index.html"
//!
//! [[destinations]]
//! name = "Excel to JSON"
//! path = "excel2json.html"
//! icon = "📊"
//! description = "Convert Excel workbooks to JSON"
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ChromeError;

static SHARED: Lazy<NavigationConfig> = Lazy::new(NavigationConfig::default);

/// One navigable tool entry in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Human-readable label
    pub name: String,
    /// Relative link target, also matched against the current path
    pub path: String,
    /// Short display glyph
    pub icon: String,
    /// Tooltip text
    pub description: String,
}

impl Destination {
    /// Create a destination entry
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: icon.into(),
            description: description.into(),
        }
    }

    /// Whether this destination is the one currently being viewed
    ///
    /// Substring containment against the current location path. A path
    /// that is a substring of another destination's path can be active
    /// at the same time as it; callers must not assume exclusivity.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path.contains(&self.path)
    }
}

/// Process-wide navigation configuration
///
/// Immutable after construction. Renderers take a reference to it, so a
/// test or an alternate mount point can supply its own table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Destinations in display order
    pub destinations: Vec<Destination>,
    /// Link target for the home entry
    pub home_path: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            destinations: vec![
                Destination::new(
                    "Excel to JSON",
                    "excel2json.html",
                    "📊",
                    "Convert Excel workbooks to JSON",
                ),
                Destination::new(
                    "JSON Compressor",
                    "json-compressor.html",
                    "🗜️",
                    "Compress and format JSON",
                ),
            ],
            home_path: "index.html".to_string(),
        }
    }
}

impl NavigationConfig {
    /// Shared instance backing the zero-argument install path
    ///
    /// Initialized on first use and never mutated afterwards.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Load configuration from a TOML file
    ///
    /// Missing files are skipped, leaving the compiled-in defaults in
    /// place. `CHROME_` environment variables override both.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Config`] when the file or environment
    /// contents fail to parse or to match the expected shape.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use toolsite_chrome::config::NavigationConfig;
    ///
    /// # fn example() -> Result<(), toolsite_chrome::error::ChromeError> {
    /// let config = NavigationConfig::load_from("./chrome.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ChromeError> {
        let config = Figment::from(figment::providers::Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("CHROME_"))
            .extract()?;
        Ok(config)
    }
}
