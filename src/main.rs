//! `NovelHunt` CLI application entry point
//!
//! Opens the interactive search screen by default, and offers one-shot
//! commands for scripting.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! novelhunt
//! novelhunt browse --query Poetry
//!
//! # Search once and print results
//! novelhunt search dune --genre Fiction --limit 5
//! novelhunt s dune --json
//!
//! # Title suggestions
//! novelhunt suggest harr
//!
//! # Configuration
//! novelhunt config get page_size
//! novelhunt config set fetch_policy=latest-issued
//! novelhunt config path
//! ```
//!
//! # Configuration
//!
//! Settings live in `~/.config/novelhunt/config.toml` (on Linux) and are
//! created with defaults on first run.

use novelhunt::{
    Result,
    cli::{Cli, Commands},
    commands,
    commands::search::SearchArgs,
    config::NovelhuntConfig,
    logging::{self, LogTarget},
    provider::{OpenLibrary, ProviderLinks},
};
use std::io;

/// Main entry point for the novelhunt application
///
/// Parses command-line arguments, installs the logger, loads configuration,
/// and dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `NovelhuntError` if logging or configuration setup fails, or if
/// the command handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    let target = if command.is_interactive() {
        let path = logging::default_log_path()
            .unwrap_or_else(|| std::env::temp_dir().join("novelhunt.log"));
        LogTarget::File(path)
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.verbose, &target)?;

    let config_path = NovelhuntConfig::config_path()?;
    let config = NovelhuntConfig::load_from(&config_path)?;
    let quiet = cli.quiet || config.quiet;

    match command {
        Commands::Browse { query } => {
            commands::browse(&config, query, quiet)?;
        }
        Commands::Search {
            title,
            genre,
            limit,
            json,
        } => {
            let provider = OpenLibrary::from_config(&config)?;
            let args = SearchArgs {
                title,
                genre,
                limit: limit.unwrap_or(config.page_size),
                json,
            };
            let links = ProviderLinks::from(&config);
            commands::search(&provider, &links, &args, quiet, &mut io::stdout())?;
        }
        Commands::Suggest { partial } => {
            let provider = OpenLibrary::from_config(&config)?;
            commands::suggest(
                &provider,
                &partial,
                config.min_suggest_chars,
                config.suggestion_limit,
                quiet,
                &mut io::stdout(),
            )?;
        }
        Commands::Config { command } => {
            commands::config(config, &command, &config_path, quiet, &mut io::stdout())?;
        }
    }

    Ok(())
}
