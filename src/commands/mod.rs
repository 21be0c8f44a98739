//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod config;
mod decode;
mod encode;
mod report;
mod scan;
mod snippet;

pub use config::ConfigCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use report::ReportCommand;
pub use scan::ScanCommand;
pub use snippet::SnippetCommand;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use invisible_unicode::{Sensitivity, Settings};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Reads text from a file, or from stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input from {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

/// Loads stored settings, falling back to defaults with a warning.
fn load_settings() -> Settings {
    match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Could not load settings, using defaults: {}", e);
            Settings::default()
        }
    }
}

/// Resolves the effective tier: explicit flag first, then stored settings.
fn resolve_sensitivity(flag: Option<Sensitivity>) -> Sensitivity {
    flag.unwrap_or_else(|| load_settings().sensitivity)
}

/// Resolves wrapping: `--wrap` or `--no-wrap` first, then stored settings.
fn resolve_wrap(wrap: bool, no_wrap: bool) -> bool {
    if wrap {
        true
    } else if no_wrap {
        false
    } else {
        load_settings().wrap
    }
}
