//! Output formatting for CLI display
//!
//! Formats book records and suggestions for the one-shot `search` and
//! `suggest` commands. Quiet mode prints bare titles so output can be piped.

use crate::provider::{BookRecord, ProviderLinks};
use colored::Colorize;

/// Format one record for display
///
/// Non-quiet output is two lines: title, year and authors, then the work URL.
#[must_use]
pub fn record_line(record: &BookRecord, links: &ProviderLinks, quiet: bool) -> String {
    if quiet {
        return record.title.clone();
    }

    let mut line = format!("  {}", record.title.bold());
    if let Some(year) = record.first_publish_year {
        line.push_str(&format!(" ({year})"));
    }
    let authors = record.authors_joined();
    if !authors.is_empty() {
        line.push_str(&format!(" by {}", authors.cyan()));
    }
    format!("{line}\n    {}", links.work(record).dimmed())
}

/// Format a suggested title for display
#[must_use]
pub fn suggestion_line(title: &str, quiet: bool) -> String {
    if quiet {
        title.to_string()
    } else {
        format!("  {}", title.green())
    }
}

/// Summary line printed after a result listing
#[must_use]
pub fn summary_line(shown: usize, total: usize) -> String {
    if shown < total {
        format!("Showing {shown} of {total} book(s)")
    } else {
        format!("Found {total} book(s)")
    }
}

/// Serialize records as pretty-printed JSON
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn records_json(records: &[BookRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
