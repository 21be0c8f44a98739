//! Invisible Unicode - Reveal what text is hiding
//!
//! A CLI tool for finding, decoding, and creating invisible Unicode text.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CommandExecutor, ConfigCommand, DecodeCommand, EncodeCommand, ReportCommand, ScanCommand,
    SnippetCommand,
};

/// Invisible Unicode - Reveal what text is hiding
///
/// Finds Tags block steganography, zero-width characters, and watermark
/// spaces in text, and encodes ASCII into invisible Tags characters.
#[derive(Parser)]
#[command(name = "invisible-unicode")]
#[command(version)]
#[command(about = "Detect, decode, and create invisible Unicode text")]
#[command(long_about = None)]
struct Cli {
    /// Verbose logging (debug level, overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan text for hidden characters
    Scan(ScanCommand),

    /// Encode ASCII text as invisible Tags characters
    Encode(EncodeCommand),

    /// Decode hidden Tags content and strip invisible characters
    Decode(DecodeCommand),

    /// Export a JSON report of hidden characters
    Report(ReportCommand),

    /// Show or change stored settings
    Config(ConfigCommand),

    /// Manage saved invisible snippets
    Snippet(SnippetCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Scan(cmd) => cmd,
            Commands::Encode(cmd) => cmd,
            Commands::Decode(cmd) => cmd,
            Commands::Report(cmd) => cmd,
            Commands::Config(cmd) => cmd,
            Commands::Snippet(cmd) => cmd,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only command output
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.command.executor().execute()
}
