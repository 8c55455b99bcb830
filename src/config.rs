//! Configuration module for novelhunt
//!
//! Manages provider endpoints, paging, suggestion behaviour, and the genre
//! list. Configuration is stored in the user's config directory
//! (`~/.config/novelhunt/config.toml` on Linux) and created with defaults on
//! first run.

use crate::search::FetchPolicy;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys that can be read and written through `novelhunt config get/set`
pub const SCALAR_KEYS: &[&str] = &[
    "search_endpoint",
    "cover_endpoint",
    "site_url",
    "placeholder_image_url",
    "default_query",
    "page_size",
    "suggestion_limit",
    "min_suggest_chars",
    "grid_columns",
    "request_timeout_secs",
    "fetch_policy",
    "quiet",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NovelhuntConfig {
    /// Title search endpoint (`search.json`)
    pub search_endpoint: String,

    /// Base URL for cover images, keyed by numeric cover id
    pub cover_endpoint: String,

    /// Public site used for "open in browser" links
    pub site_url: String,

    /// Image shown for records without a cover id
    pub placeholder_image_url: String,

    /// Query fetched when the interactive UI starts
    pub default_query: String,

    /// Genres offered by the genre filter (an "All Genres" entry is always added)
    pub genres: Vec<String>,

    /// Number of result cards shown before "view all"
    pub page_size: usize,

    /// Maximum number of title suggestions
    pub suggestion_limit: usize,

    /// Minimum input length (in characters) that triggers suggestions
    pub min_suggest_chars: usize,

    /// Number of card columns in the result grid
    pub grid_columns: usize,

    /// Per-request timeout
    pub request_timeout_secs: u64,

    /// How responses of overlapping fetches are reconciled
    pub fetch_policy: FetchPolicy,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for NovelhuntConfig {
    fn default() -> Self {
        Self {
            search_endpoint: "https://openlibrary.org/search.json".to_string(),
            cover_endpoint: "https://covers.openlibrary.org/b/id".to_string(),
            site_url: "https://openlibrary.org".to_string(),
            placeholder_image_url: "https://via.placeholder.com/150".to_string(),
            default_query: "Science".to_string(),
            genres: ["Fiction", "Non-Fiction", "Science", "History", "Fantasy"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            page_size: 18,
            suggestion_limit: 5,
            min_suggest_chars: 3,
            grid_columns: 6,
            request_timeout_secs: 30,
            fetch_policy: FetchPolicy::default(),
            quiet: false,
        }
    }
}

impl NovelhuntConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("novelhunt").join("config.toml"))
    }

    /// Load configuration from a specific file, writing defaults if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, validated, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Check values that would make the UI unusable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first invalid key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("page_size", self.page_size),
            ("suggestion_limit", self.suggestion_limit),
            ("grid_columns", self.grid_columns),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(ConfigError::Message(format!("'{key}' must be greater than zero")));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "'request_timeout_secs' must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Read a scalar setting as a string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "search_endpoint" => self.search_endpoint.clone(),
            "cover_endpoint" => self.cover_endpoint.clone(),
            "site_url" => self.site_url.clone(),
            "placeholder_image_url" => self.placeholder_image_url.clone(),
            "default_query" => self.default_query.clone(),
            "page_size" => self.page_size.to_string(),
            "suggestion_limit" => self.suggestion_limit.to_string(),
            "min_suggest_chars" => self.min_suggest_chars.to_string(),
            "grid_columns" => self.grid_columns.to_string(),
            "request_timeout_secs" => self.request_timeout_secs.to_string(),
            "fetch_policy" => self.fetch_policy.to_string(),
            "quiet" => self.quiet.to_string(),
            _ => return Err(ConfigError::NotFound(key.to_string())),
        };
        Ok(value)
    }

    /// Update a scalar setting from its string form
    ///
    /// The change is validated but not saved.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys and
    /// `ConfigError::Message` for values that don't parse or fail validation.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.clone();
        match key {
            "search_endpoint" => updated.search_endpoint = value.to_string(),
            "cover_endpoint" => updated.cover_endpoint = value.to_string(),
            "site_url" => updated.site_url = value.to_string(),
            "placeholder_image_url" => updated.placeholder_image_url = value.to_string(),
            "default_query" => updated.default_query = value.to_string(),
            "page_size" => updated.page_size = parse_value(key, value)?,
            "suggestion_limit" => updated.suggestion_limit = parse_value(key, value)?,
            "min_suggest_chars" => updated.min_suggest_chars = parse_value(key, value)?,
            "grid_columns" => updated.grid_columns = parse_value(key, value)?,
            "request_timeout_secs" => updated.request_timeout_secs = parse_value(key, value)?,
            "fetch_policy" => updated.fetch_policy = parse_value(key, value)?,
            "quiet" => updated.quiet = parse_value(key, value)?,
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ConfigError::Message(format!("Invalid value for {key}: '{value}' ({e})")))
}
