//! Encode command - hide ASCII text as invisible Tags characters.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use invisible_unicode::{encode_with_config, EncoderConfig};

use super::{read_input, resolve_wrap, CommandExecutor};

/// Encode ASCII text into invisible Tags block characters.
///
/// The output looks empty in most terminals but can be piped or pasted.
/// Non-ASCII input is rejected with the position of the offending character.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Text message to encode (mutually exclusive with --input)
    #[arg(short, long, conflicts_with = "input")]
    pub message: Option<String>,

    /// File to encode (reads stdin if neither --message nor --input is given)
    #[arg(short, long, conflicts_with = "message")]
    pub input: Option<PathBuf>,

    /// Wrap the output in begin/cancel Tags delimiters
    #[arg(long, conflicts_with = "no_wrap")]
    pub wrap: bool,

    /// Do not wrap, even if wrapping is enabled in the config
    #[arg(long)]
    pub no_wrap: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let text = match &self.message {
            Some(message) => message.clone(),
            // Trailing newlines come from files and pipes, not the message
            None => read_input(self.input.as_deref())?
                .trim_end_matches(['\r', '\n'])
                .to_string(),
        };

        let config = EncoderConfig {
            wrap: resolve_wrap(self.wrap, self.no_wrap),
        };
        let encoded = encode_with_config(&text, &config).context("Failed to encode message")?;
        debug!(wrap = config.wrap, "Encoded {} characters", text.chars().count());

        println!("{}", encoded);
        Ok(())
    }
}
