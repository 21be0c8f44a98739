//! Scan command - list hidden characters found in text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use invisible_unicode::{find_hidden, reveal, Sensitivity};

use super::{read_input, resolve_sensitivity, CommandExecutor};

/// Scan text for hidden Unicode characters.
///
/// Prints one line per finding: `start..end class replacement`, with offsets
/// in UTF-16 code units. Finding nothing is not an error.
#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Input file (reads stdin if not provided)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Detection tier: standard, thorough, or paranoid (default: from config)
    #[arg(short, long)]
    pub sensitivity: Option<Sensitivity>,

    /// Print the text with hidden characters replaced by visible labels
    #[arg(long, conflicts_with = "json")]
    pub reveal: bool,

    /// Print findings as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for ScanCommand {
    fn execute(&self) -> Result<()> {
        let text = read_input(self.input.as_deref())?;
        let sensitivity = resolve_sensitivity(self.sensitivity);

        if self.reveal {
            print!("{}", reveal(&text, sensitivity));
            return Ok(());
        }

        let findings = find_hidden(&text, sensitivity);
        debug!(%sensitivity, count = findings.len(), "Scan complete");

        if self.json {
            let json = serde_json::to_string_pretty(&findings)
                .context("Failed to serialize findings")?;
            println!("{}", json);
            return Ok(());
        }

        for finding in &findings {
            println!(
                "{}..{}\t{}\t{}",
                finding.start, finding.end, finding.class, finding.replacement
            );
        }

        Ok(())
    }
}
