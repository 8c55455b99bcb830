//! `NovelHunt` - a terminal book finder over the Open Library search API
//!
//! The crate is split into a provider layer that talks to the remote search
//! endpoint, a search controller that owns the UI-facing state and issues
//! asynchronous fetches, and a ratatui front end that renders a pure view of
//! that state.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod provider;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NovelhuntError {
    /// Search provider error
    #[error("Provider error: {0}")]
    ProviderError(#[from] provider::ProviderError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// A logger was already installed
    #[error("Logger error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// JSON output could not be produced
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type used by commands and the binary
pub type Result<T> = std::result::Result<T, NovelhuntError>;
