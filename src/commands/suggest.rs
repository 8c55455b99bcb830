//! Suggest command - title suggestions for a partial title

use crate::{NovelhuntError, Result, output, provider::SearchProvider};
use std::io::Write;

/// Execute the suggest command, writing up to `limit` titles to `out`
///
/// Partials shorter than `min_chars` characters are rejected, matching the
/// threshold the interactive search box uses.
///
/// # Errors
/// Returns an error if the partial is too short, the provider call fails, or
/// writing the output fails.
pub fn execute<W: Write>(
    provider: &dyn SearchProvider,
    partial: &str,
    min_chars: usize,
    limit: usize,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    if partial.chars().count() < min_chars {
        return Err(NovelhuntError::InvalidInput(format!(
            "Suggestions need at least {min_chars} characters"
        )));
    }

    let titles = provider.suggest(partial, limit)?;
    if titles.is_empty() && !quiet {
        writeln!(out, "No suggestions.")?;
    }
    for title in titles.iter().take(limit) {
        writeln!(out, "{}", output::suggestion_line(title, quiet))?;
    }
    Ok(())
}
