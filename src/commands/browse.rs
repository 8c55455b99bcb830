//! Browse command - interactive book search screen

use crate::{Result, config::NovelhuntConfig, provider::OpenLibrary, ui::App};
use std::sync::Arc;

/// Execute the browse command
///
/// `query` replaces the configured default query fetched on startup.
///
/// # Errors
/// Returns an error if the provider cannot be built from the configuration or
/// the terminal UI fails.
pub fn execute(config: &NovelhuntConfig, query: Option<String>, quiet: bool) -> Result<()> {
    let provider = OpenLibrary::from_config(config)?;

    let mut app = App::new(config);
    if let Some(query) = query {
        app = app.with_default_query(query);
    }
    app.run(Arc::new(provider))?;

    if !quiet {
        println!("Happy reading!");
    }
    Ok(())
}
