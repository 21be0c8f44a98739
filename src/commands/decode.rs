//! Decode command - recover hidden Tags content and strip invisibles.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use invisible_unicode::{decode_with_config, DecoderConfig, Sensitivity};

use super::{read_input, resolve_sensitivity, CommandExecutor};

/// Decode text containing invisible Tags characters.
///
/// Hidden Tags content is turned back into ASCII in place and other
/// invisible characters at the chosen tier are stripped. Never fails on
/// the text itself.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Input file (reads stdin if not provided)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Stripping tier: standard, thorough, or paranoid (default: from config)
    #[arg(short, long)]
    pub sensitivity: Option<Sensitivity>,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let text = read_input(self.input.as_deref())?;
        let config = DecoderConfig::new(resolve_sensitivity(self.sensitivity));

        print!("{}", decode_with_config(&text, &config));
        Ok(())
    }
}
