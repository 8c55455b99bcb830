//! Book record types and provider payload mapping
//!
//! The provider returns loosely-typed JSON documents. This module turns them
//! into [`BookRecord`]s: records without a `key` or `title` are skipped,
//! optional fields of the wrong JSON type are treated as absent, and ids are
//! kept unique within a result set.

use crate::config::NovelhuntConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// A read-only projection of one provider document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    /// Provider key (e.g. `/works/OL45804W`), unique within a result set
    pub id: String,
    /// Book title
    pub title: String,
    /// Author names in provider order (empty when absent)
    pub authors: Vec<String>,
    /// Year of first publication
    pub first_publish_year: Option<i32>,
    /// Publisher names (empty when absent)
    pub publishers: Vec<String>,
    /// Language codes (empty when absent)
    pub languages: Vec<String>,
    /// Numeric cover id used to derive cover image URLs
    pub cover_image_id: Option<u64>,
    /// Median page count across editions
    pub median_page_count: Option<u32>,
}

impl BookRecord {
    /// Create a record with only the required fields set
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            first_publish_year: None,
            publishers: Vec::new(),
            languages: Vec::new(),
            cover_image_id: None,
            median_page_count: None,
        }
    }

    /// Authors joined for display, empty when there are none
    #[must_use]
    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }
}

/// Cover image size variants offered by the covers endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
    /// Medium cover, used on result cards
    Medium,
    /// Large cover, used in the detail view
    Large,
}

impl CoverSize {
    /// Size suffix used in the cover file name
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

/// Builds outbound links (cover images, work pages) for records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderLinks {
    site_url: String,
    cover_endpoint: String,
    placeholder_image_url: String,
}

impl ProviderLinks {
    /// Create a link builder; trailing slashes on the base URLs are ignored
    #[must_use]
    pub fn new(
        site_url: impl Into<String>,
        cover_endpoint: impl Into<String>,
        placeholder_image_url: impl Into<String>,
    ) -> Self {
        Self {
            site_url: site_url.into().trim_end_matches('/').to_string(),
            cover_endpoint: cover_endpoint.into().trim_end_matches('/').to_string(),
            placeholder_image_url: placeholder_image_url.into(),
        }
    }

    /// Cover image URL for a cover id, or the placeholder when there is none
    #[must_use]
    pub fn cover(&self, cover_image_id: Option<u64>, size: CoverSize) -> String {
        match cover_image_id {
            Some(id) => format!("{}/{}-{}.jpg", self.cover_endpoint, id, size.suffix()),
            None => self.placeholder_image_url.clone(),
        }
    }

    /// Public page for a record on the provider's site
    #[must_use]
    pub fn work(&self, record: &BookRecord) -> String {
        if record.id.starts_with('/') {
            format!("{}{}", self.site_url, record.id)
        } else {
            format!("{}/{}", self.site_url, record.id)
        }
    }
}

impl From<&NovelhuntConfig> for ProviderLinks {
    fn from(config: &NovelhuntConfig) -> Self {
        Self::new(
            &config.site_url,
            &config.cover_endpoint,
            &config.placeholder_image_url,
        )
    }
}

/// Top-level search payload; a body without `docs` is malformed
#[derive(Debug, Deserialize)]
pub(crate) struct SearchPayload {
    pub docs: Vec<RawDoc>,
}

/// One provider document as received
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawDoc {
    #[serde(deserialize_with = "lenient")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub author_name: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub first_publish_year: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub publisher: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub language: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub cover_i: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub number_of_pages_median: Option<u32>,
}

/// Deserialize a field, falling back to `None` when the value has the wrong type
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl RawDoc {
    /// Convert into a record; `None` when `key` or `title` is missing
    fn into_record(self) -> Option<BookRecord> {
        Some(BookRecord {
            id: self.key?,
            title: self.title?,
            authors: self.author_name.unwrap_or_default(),
            first_publish_year: self.first_publish_year,
            publishers: self.publisher.unwrap_or_default(),
            languages: self.language.unwrap_or_default(),
            cover_image_id: self.cover_i,
            median_page_count: self.number_of_pages_median,
        })
    }
}

/// Map provider documents into records, preserving order
///
/// Documents without a key or title are dropped, as are later duplicates of an
/// id that was already seen.
pub(crate) fn into_records(docs: Vec<RawDoc>) -> Vec<BookRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(docs.len());

    for doc in docs {
        let Some(record) = doc.into_record() else {
            log::debug!("Skipping provider document without key or title");
            continue;
        };
        if !seen.insert(record.id.clone()) {
            log::debug!("Dropping duplicate record id {}", record.id);
            continue;
        }
        records.push(record);
    }

    records
}

/// Extract up to `limit` titles from provider documents
pub(crate) fn into_titles(docs: Vec<RawDoc>, limit: usize) -> Vec<String> {
    docs.into_iter()
        .filter_map(|doc| doc.title)
        .take(limit)
        .collect()
}
