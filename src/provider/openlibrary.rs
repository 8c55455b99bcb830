//! Open Library search client
//!
//! Blocking `reqwest` client for the `search.json` endpoint. Each call is one
//! GET request; there is no caching, retry, or request de-duplication.

use super::error::{ProviderError, Result};
use super::types::{BookRecord, SearchPayload, into_records, into_titles};
use super::SearchProvider;
use crate::config::NovelhuntConfig;
use reqwest::blocking::Client;
use std::time::Duration;

/// Search provider backed by the Open Library HTTP API
#[derive(Debug, Clone)]
pub struct OpenLibrary {
    search_endpoint: String,
    client: Client,
}

impl OpenLibrary {
    /// Create a client for the given `search.json` endpoint
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidEndpoint` if the endpoint is not an
    /// http(s) URL, or `ProviderError::Http` if the HTTP client cannot be built.
    pub fn new(search_endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let search_endpoint = search_endpoint.into();
        if !(search_endpoint.starts_with("http://") || search_endpoint.starts_with("https://")) {
            return Err(ProviderError::InvalidEndpoint(search_endpoint));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("novelhunt/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            search_endpoint,
            client,
        })
    }

    /// Create a client from application configuration
    ///
    /// # Errors
    ///
    /// See [`OpenLibrary::new`].
    pub fn from_config(config: &NovelhuntConfig) -> Result<Self> {
        Self::new(
            config.search_endpoint.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// URL for a result search, with the genre appended as a subject filter
    pub(crate) fn search_url(&self, title: &str, genre: Option<&str>) -> String {
        let mut url = format!(
            "{}?title={}",
            self.search_endpoint,
            urlencoding::encode(title)
        );
        if let Some(genre) = genre.filter(|g| !g.is_empty()) {
            url.push_str("&subject=");
            url.push_str(&urlencoding::encode(genre));
        }
        url
    }

    /// URL for a suggestion lookup
    pub(crate) fn suggest_url(&self, partial: &str, limit: usize) -> String {
        format!(
            "{}?title={}&limit={}",
            self.search_endpoint,
            urlencoding::encode(partial),
            limit
        )
    }

    /// Perform a GET and decode the `docs` payload
    fn fetch_payload(&self, url: &str) -> Result<SearchPayload> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl SearchProvider for OpenLibrary {
    fn search(&self, title: &str, genre: Option<&str>) -> Result<Vec<BookRecord>> {
        let payload = self.fetch_payload(&self.search_url(title, genre))?;
        Ok(into_records(payload.docs))
    }

    fn suggest(&self, partial: &str, limit: usize) -> Result<Vec<String>> {
        let payload = self.fetch_payload(&self.suggest_url(partial, limit))?;
        Ok(into_titles(payload.docs, limit))
    }
}
