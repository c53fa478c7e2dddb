//! Error types and error handling

use thiserror::Error;

/// Library error type
#[derive(Debug, Error)]
pub enum ChromeError {
    /// Configuration loading or extraction error
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}
