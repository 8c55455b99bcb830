//! Logger setup
//!
//! Log records go through the `log` facade to `env_logger`. The filter comes
//! from `RUST_LOG` and falls back to `warn` (or `debug` with `--verbose`).
//! The interactive UI owns the terminal, so in that mode records are written
//! to a log file instead of stderr.

use env_logger::{Env, Target};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for one-shot commands
    Stderr,
    /// Append to a file, for the interactive UI
    File(PathBuf),
}

/// Default filter when `RUST_LOG` is unset
#[must_use]
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Log file used by the interactive UI (`{cache_dir}/novelhunt/novelhunt.log`)
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("novelhunt").join("novelhunt.log"))
}

/// Install the global logger
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be opened, or
/// `SetLoggerError` if a logger is already installed.
pub fn init(verbose: bool, target: &LogTarget) -> crate::Result<()> {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = env_logger::Builder::from_env(env);

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder
                .target(Target::Pipe(Box::new(file)))
                .write_style(env_logger::WriteStyle::Never);
        }
    }

    builder.try_init()?;
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
