//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal setup, drawing, or event polling
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The system clipboard could not be reached or written
    #[error("Clipboard unavailable: {0}")]
    ClipboardError(String),

    /// The default browser could not be launched
    #[error("Failed to open browser: {0}")]
    BrowserError(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
