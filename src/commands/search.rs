//! Search command - one-shot title search

use crate::{
    NovelhuntError, Result, output,
    provider::{ProviderLinks, SearchProvider},
};
use std::io::Write;

/// Parameters for the search command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    /// Title to search for
    pub title: String,
    /// Genre filter; blank means no filter
    pub genre: Option<String>,
    /// Maximum records printed
    pub limit: usize,
    /// Print JSON instead of formatted lines
    pub json: bool,
}

/// Execute the search command, writing results to `out`
///
/// # Errors
/// Returns an error if the title is blank, the limit is zero, the provider
/// call fails, or writing the output fails.
pub fn execute<W: Write>(
    provider: &dyn SearchProvider,
    links: &ProviderLinks,
    args: &SearchArgs,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        return Err(NovelhuntError::InvalidInput("Search title cannot be empty".into()));
    }
    if args.limit == 0 {
        return Err(NovelhuntError::InvalidInput("Limit must be greater than zero".into()));
    }
    let genre = args.genre.as_deref().map(str::trim).filter(|g| !g.is_empty());

    log::info!("Searching '{title}' (genre: {genre:?})");
    let records = provider.search(title, genre)?;
    let shown = &records[..records.len().min(args.limit)];

    if args.json {
        writeln!(out, "{}", output::records_json(shown)?)?;
        return Ok(());
    }

    if shown.is_empty() {
        if !quiet {
            writeln!(out, "No books found.")?;
        }
        return Ok(());
    }

    for record in shown {
        writeln!(out, "{}", output::record_line(record, links, quiet))?;
    }
    if !quiet {
        writeln!(out, "\n{}", output::summary_line(shown.len(), records.len()))?;
    }
    Ok(())
}
