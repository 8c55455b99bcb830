//! Remote search provider
//!
//! The provider is the only external collaborator: a query-by-title endpoint
//! (optionally filtered by subject) and a cover image endpoint. The
//! [`SearchProvider`] trait is the seam between the search controller and the
//! network, so the controller can be driven by stubs in tests.
//!
//! # Example
//!
//! ```no_run
//! use novelhunt::provider::{OpenLibrary, SearchProvider};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = "https://openlibrary.org/search.json";
//! let provider = OpenLibrary::new(endpoint, Duration::from_secs(30))?;
//! for record in provider.search("dune", Some("Fiction"))? {
//!     println!("{} ({})", record.title, record.authors_joined());
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod openlibrary;
mod types;

pub use error::{ProviderError, Result};
pub use openlibrary::OpenLibrary;
pub use types::{BookRecord, CoverSize, ProviderLinks};

/// A source of book records and title suggestions
///
/// Implementations must be callable from background threads.
pub trait SearchProvider: Send + Sync {
    /// Search records by title, optionally constrained to a genre (subject)
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// malformed payload.
    fn search(&self, title: &str, genre: Option<&str>) -> Result<Vec<BookRecord>>;

    /// Fetch up to `limit` titles matching a partial title
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SearchProvider::search`].
    fn suggest(&self, partial: &str, limit: usize) -> Result<Vec<String>>;
}
