//! Config command - show and change stored settings.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use invisible_unicode::{Sensitivity, Settings};

use super::CommandExecutor;

/// Manage stored settings (~/.invisible-unicode/config.toml).
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current settings
    Show,

    /// Change one or more settings
    Set {
        /// Default detection tier
        #[arg(short, long)]
        sensitivity: Option<Sensitivity>,

        /// Wrap encoded output in Tags delimiters by default
        #[arg(short, long)]
        wrap: Option<bool>,
    },

    /// Restore default settings
    Reset,

    /// Print the settings file path
    Path,
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Show => {
                let settings = Settings::load().context("Failed to load settings")?;
                println!("sensitivity = {}", settings.sensitivity);
                println!("wrap = {}", settings.wrap);
            }
            ConfigAction::Set { sensitivity, wrap } => {
                let mut settings = Settings::load().context("Failed to load settings")?;
                if let Some(sensitivity) = sensitivity {
                    settings.sensitivity = *sensitivity;
                }
                if let Some(wrap) = wrap {
                    settings.wrap = *wrap;
                }
                settings.save().context("Failed to save settings")?;
                println!("Settings saved.");
            }
            ConfigAction::Reset => {
                Settings::default()
                    .save()
                    .context("Failed to save settings")?;
                println!("Settings reset to defaults.");
            }
            ConfigAction::Path => {
                let path = Settings::config_path().context("Failed to locate settings")?;
                println!("{}", path.display());
            }
        }
        Ok(())
    }
}
