//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for novelhunt using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive search screen (default)
//! - **search**: One-shot title search printed to stdout
//! - **suggest**: Print title suggestions for a partial title
//! - **config**: Read and write configuration settings
//!
//! Global `--quiet` and `--verbose` flags apply to every command, and each
//! command has a one-letter alias (`b`, `s`, `g`).

use clap::{Parser, Subcommand};

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., `page_size=24`)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., `default_query`)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file path
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "novelhunt")]
#[command(about = "Find books from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log at debug level (overridden by `RUST_LOG`)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive search screen (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Query fetched when the screen opens (defaults to `default_query`)
        #[arg(long = "query", value_name = "QUERY")]
        query: Option<String>,
    },

    /// Search books by title and print the results
    #[command(visible_alias = "s")]
    Search {
        /// Title to search for
        #[arg(value_name = "TITLE")]
        title: String,

        /// Restrict results to a genre (subject)
        #[arg(short = 'g', long = "genre", value_name = "GENRE")]
        genre: Option<String>,

        /// Maximum number of records to print (defaults to `page_size`)
        #[arg(short = 'n', long = "limit", value_name = "N")]
        limit: Option<usize>,

        /// Print records as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Print title suggestions for a partial title
    #[command(visible_alias = "g")]
    Suggest {
        /// Partial title
        #[arg(value_name = "PARTIAL")]
        partial: String,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse { query: None })
    }
}

impl Commands {
    /// Whether this command takes over the terminal
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Browse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::parse_from(["novelhunt"]);
        assert_eq!(cli.get_command(), Commands::Browse { query: None });
        assert!(cli.get_command().is_interactive());
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_browse_with_query() {
        let cli = Cli::parse_from(["novelhunt", "b", "--query", "Poetry"]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: Some("Poetry".to_string())
            }
        );
    }

    #[test]
    fn test_parse_search_with_options() {
        let cli = Cli::parse_from([
            "novelhunt", "search", "dune", "-g", "Fiction", "-n", "3", "--json", "-q",
        ]);
        assert!(cli.quiet);
        if let Some(Commands::Search {
            title,
            genre,
            limit,
            json,
        }) = cli.command
        {
            assert_eq!(title, "dune");
            assert_eq!(genre.as_deref(), Some("Fiction"));
            assert_eq!(limit, Some(3));
            assert!(json);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_parse_search_alias() {
        let cli = Cli::parse_from(["novelhunt", "s", "emma"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Search { ref title, genre: None, limit: None, json: false })
                if title == "emma"
        ));
    }

    #[test]
    fn test_parse_suggest() {
        let cli = Cli::parse_from(["novelhunt", "-v", "suggest", "harr"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.get_command(),
            Commands::Suggest {
                partial: "harr".to_string()
            }
        );
        assert!(!cli.get_command().is_interactive());
    }

    #[test]
    fn test_parse_config_subcommands() {
        let cli = Cli::parse_from(["novelhunt", "config", "set", "page_size=24"]);
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Set {
                    setting: "page_size=24".to_string()
                }
            })
        );

        let cli = Cli::parse_from(["novelhunt", "config", "get", "quiet"]);
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Get {
                    key: "quiet".to_string()
                }
            })
        );

        let cli = Cli::parse_from(["novelhunt", "config", "path"]);
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Path
            })
        );
    }

    #[test]
    fn test_search_requires_title() {
        assert!(Cli::try_parse_from(["novelhunt", "search"]).is_err());
    }
}
