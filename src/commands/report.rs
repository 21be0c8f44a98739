//! Report command - export scan findings as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use invisible_unicode::{ScanReport, Sensitivity};

use super::{read_input, resolve_sensitivity, CommandExecutor};

/// Build a versioned JSON report of hidden characters in a text.
#[derive(Args, Debug)]
pub struct ReportCommand {
    /// Input file (reads stdin if not provided)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Source name recorded in the report (default: input path or "stdin")
    #[arg(long)]
    pub source: Option<String>,

    /// Detection tier: standard, thorough, or paranoid (default: from config)
    #[arg(short, long)]
    pub sensitivity: Option<Sensitivity>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ReportCommand {
    fn source(&self) -> String {
        match (&self.source, &self.input) {
            (Some(source), _) => source.clone(),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => "stdin".to_string(),
        }
    }
}

impl CommandExecutor for ReportCommand {
    fn execute(&self) -> Result<()> {
        let text = read_input(self.input.as_deref())?;
        let sensitivity = resolve_sensitivity(self.sensitivity);

        let report = ScanReport::from_scan(&text, sensitivity, &self.source());
        let json = report.to_json().context("Failed to build report")?;

        match &self.output {
            Some(path) => {
                fs::write(path, json)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                info!(
                    findings = report.summary.total,
                    "Report written to {}",
                    path.display()
                );
            }
            None => println!("{}", json),
        }

        Ok(())
    }
}
