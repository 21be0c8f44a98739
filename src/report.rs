//! Structured scan reports for export.
//!
//! A report wraps scan findings with a format version, per-class counts,
//! the scanned source, and a timestamp.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charset::{format_codepoint, range_for, Sensitivity};
use crate::scanner::{find_hidden, Finding, FindingClass};

/// Report format version.
pub const REPORT_VERSION: u32 = 1;

/// Errors that can occur while exporting a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Per-class finding counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub tags: usize,
    pub zerowidth: usize,
    pub watermark: usize,
}

impl ReportSummary {
    fn record(&mut self, class: FindingClass) {
        self.total += 1;
        match class {
            FindingClass::Tags => self.tags += 1,
            FindingClass::ZeroWidth => self.zerowidth += 1,
            FindingClass::Watermark => self.watermark += 1,
        }
    }
}

/// UTF-16 span of a reported finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPosition {
    pub start: usize,
    pub end: usize,
}

/// A finding as it appears in an exported report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFinding {
    #[serde(rename = "type")]
    pub class: FindingClass,
    pub replacement: String,
    /// Every original codepoint, formatted `U+XXXX`.
    pub codepoints: Vec<String>,
    /// Name of the range table entry that flagged the first character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    pub position: ReportPosition,
}

impl From<&Finding> for ReportFinding {
    fn from(finding: &Finding) -> Self {
        Self {
            class: finding.class,
            replacement: finding.replacement.clone(),
            codepoints: finding.codepoints().map(format_codepoint).collect(),
            // Tier tables are nested, so the widest tier names every flagged codepoint
            range: finding
                .codepoints()
                .next()
                .and_then(|cp| range_for(cp, Sensitivity::Paranoid))
                .map(|range| range.name.to_string()),
            position: ReportPosition {
                start: finding.start,
                end: finding.end,
            },
        }
    }
}

/// Versioned scan report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub version: u32,
    /// Where the scanned text came from (URL, file path, or `stdin`).
    pub source: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    pub summary: ReportSummary,
    pub findings: Vec<ReportFinding>,
}

impl ScanReport {
    /// Builds a report from existing findings.
    pub fn build(findings: &[Finding], source: &str, timestamp: &str) -> Self {
        let mut summary = ReportSummary::default();
        let findings = findings
            .iter()
            .map(|finding| {
                summary.record(finding.class);
                ReportFinding::from(finding)
            })
            .collect();

        Self {
            version: REPORT_VERSION,
            source: source.to_string(),
            timestamp: timestamp.to_string(),
            summary,
            findings,
        }
    }

    /// Scans `text` and builds a report stamped with the current UTC time.
    pub fn from_scan(text: &str, sensitivity: Sensitivity, source: &str) -> Self {
        let findings = find_hidden(text, sensitivity);
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        Self::build(&findings, source, &timestamp)
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
