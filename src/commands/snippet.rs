//! Snippet command - manage saved invisible text.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::debug;

use invisible_unicode::{encode_with_config, EncoderConfig, Snippet, SnippetLibrary};

use super::{resolve_wrap, CommandExecutor};

/// Manage saved snippets (~/.invisible-unicode/snippets.toml).
#[derive(Args, Debug)]
pub struct SnippetCommand {
    #[command(subcommand)]
    pub action: SnippetAction,
}

#[derive(Subcommand, Debug)]
pub enum SnippetAction {
    /// Encode a message and save it under a name
    Add {
        /// Snippet name
        name: String,

        /// ASCII message to encode
        message: String,

        /// Wrap the content in begin/cancel Tags delimiters
        #[arg(long, conflicts_with = "no_wrap")]
        wrap: bool,

        /// Do not wrap, even if wrapping is enabled in the config
        #[arg(long)]
        no_wrap: bool,

        /// Replace an existing snippet with the same name
        #[arg(short, long)]
        force: bool,
    },

    /// List saved snippets
    List,

    /// Print a snippet's invisible content
    Show {
        /// Snippet name
        name: String,

        /// Print the decoded message instead of the invisible content
        #[arg(short, long)]
        decode: bool,
    },

    /// Remove a saved snippet
    Remove {
        /// Snippet name
        name: String,
    },
}

impl CommandExecutor for SnippetCommand {
    fn execute(&self) -> Result<()> {
        match &self.action {
            SnippetAction::Add {
                name,
                message,
                wrap,
                no_wrap,
                force,
            } => {
                let config = EncoderConfig {
                    wrap: resolve_wrap(*wrap, *no_wrap),
                };
                let content =
                    encode_with_config(message, &config).context("Failed to encode message")?;
                let snippet = Snippet::new(content);

                let mut library = SnippetLibrary::load().context("Failed to load snippets")?;
                if *force {
                    library.upsert(name, snippet)?;
                } else {
                    library.add(name, snippet)?;
                }
                library.save().context("Failed to save snippets")?;

                debug!(wrap = config.wrap, "Saved snippet {}", name.trim());
                println!("Snippet '{}' saved.", name.trim());
            }
            SnippetAction::List => {
                let library = SnippetLibrary::load().context("Failed to load snippets")?;
                if library.is_empty() {
                    println!("No snippets saved.");
                    return Ok(());
                }
                for (name, snippet) in library.list() {
                    println!(
                        "{}\t[{} invisible chars]\t{}",
                        name,
                        snippet.char_count(),
                        snippet.message()
                    );
                }
            }
            SnippetAction::Show { name, decode } => {
                let library = SnippetLibrary::load().context("Failed to load snippets")?;
                let snippet = library
                    .get(name)
                    .with_context(|| format!("Snippet not found: {}", name))?;
                if *decode {
                    println!("{}", snippet.message());
                } else {
                    println!("{}", snippet.content);
                }
            }
            SnippetAction::Remove { name } => {
                let mut library = SnippetLibrary::load().context("Failed to load snippets")?;
                library.remove(name)?;
                library.save().context("Failed to save snippets")?;
                println!("Snippet '{}' removed.", name.trim());
            }
        }
        Ok(())
    }
}
