//! Scanning text for hidden characters.
//!
//! The scanner collects every flagged scalar with its UTF-16 offsets, then
//! merges adjacent Tags block characters into one finding per hidden
//! message. Everything else becomes one finding per character, labeled
//! either as a watermark space or a generic zero-width character.
//!
//! Offsets are UTF-16 code units so consumers holding native UTF-16 strings
//! can split on them directly. Use [`Finding::byte_range`] to slice a `&str`.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::charset::names::{label, watermark_name, zero_width_name};
use crate::charset::tags::is_tag;
use crate::charset::{classify, RawMatch, Sensitivity};
use crate::decoder::decode_run;

/// Class of a finding, used for styling and labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingClass {
    /// A run of Tags block characters carrying a hidden message.
    Tags,
    /// A zero-width or other invisible format character.
    ZeroWidth,
    /// An atypical space associated with generated-text watermarking.
    Watermark,
}

impl FindingClass {
    /// Classifies a flagged character. Priority: Tags > watermark > zero-width.
    pub fn of(c: char) -> Self {
        if is_tag(c) {
            FindingClass::Tags
        } else if watermark_name(c as u32).is_some() {
            FindingClass::Watermark
        } else {
            FindingClass::ZeroWidth
        }
    }

    /// Lowercase name, as used in exported reports.
    pub fn as_str(self) -> &'static str {
        match self {
            FindingClass::Tags => "tags",
            FindingClass::ZeroWidth => "zerowidth",
            FindingClass::Watermark => "watermark",
        }
    }
}

impl fmt::Display for FindingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected span of hidden characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// UTF-16 offset of the first code unit (inclusive).
    pub start: usize,
    /// UTF-16 offset past the last code unit (exclusive).
    pub end: usize,
    /// The hidden characters exactly as they appear in the text.
    pub original: String,
    /// Decoded message (Tags) or bracketed label (everything else).
    pub replacement: String,
    /// Character class.
    #[serde(rename = "type")]
    pub class: FindingClass,
}

impl Finding {
    /// Length of the finding in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: findings cover at least one character.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Codepoints of the original characters.
    pub fn codepoints(&self) -> impl Iterator<Item = u32> + '_ {
        self.original.chars().map(|c| c as u32)
    }

    /// Converts the UTF-16 span into a byte range of `text`.
    ///
    /// Returns `None` if `text` is not the string this finding came from,
    /// i.e. the offsets do not land on character boundaries inside it.
    pub fn byte_range(&self, text: &str) -> Option<Range<usize>> {
        let mut start = None;
        let mut units = 0;
        for (byte, c) in text.char_indices() {
            if units == self.start {
                start = Some(byte);
            }
            if units == self.end {
                return start.map(|s| s..byte);
            }
            units += c.len_utf16();
        }
        if units == self.end {
            return start.map(|s| s..text.len());
        }
        None
    }

    /// Text shown in place of the hidden characters when revealing.
    pub fn render(&self) -> String {
        match self.class {
            FindingClass::Tags => format!("[Tags: {}]", self.replacement),
            FindingClass::ZeroWidth | FindingClass::Watermark => self.replacement.clone(),
        }
    }
}

/// Scans `text` for hidden characters at the given tier.
///
/// Findings are ordered by `start` and never overlap. This function never
/// fails; text without hidden characters yields an empty list.
pub fn find_hidden(text: &str, sensitivity: Sensitivity) -> Vec<Finding> {
    if text.is_empty() {
        return Vec::new();
    }

    let raw: Vec<RawMatch> = classify(sensitivity).find_iter(text).collect();
    let findings = merge_matches(&raw);

    debug!(
        %sensitivity,
        raw_matches = raw.len(),
        findings = findings.len(),
        "Scanned text"
    );

    findings
}

/// Scans raw UTF-16 code units for hidden characters.
///
/// Produces the same findings as [`find_hidden`] for well-formed input.
/// Unpaired surrogates are never flagged.
pub fn find_hidden_utf16(units: &[u16], sensitivity: Sensitivity) -> Vec<Finding> {
    if units.is_empty() {
        return Vec::new();
    }

    let raw: Vec<RawMatch> = classify(sensitivity).find_iter_utf16(units).collect();
    let findings = merge_matches(&raw);

    debug!(
        %sensitivity,
        raw_matches = raw.len(),
        findings = findings.len(),
        "Scanned UTF-16 text"
    );

    findings
}

/// Merges adjacent Tags matches into runs and labels everything else.
fn merge_matches(raw: &[RawMatch]) -> Vec<Finding> {
    let mut findings = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let current = &raw[i];

        if is_tag(current.scalar) {
            let mut end = current.end;
            let mut original = String::from(current.scalar);
            let mut j = i + 1;

            while let Some(next) = raw.get(j) {
                if !is_tag(next.scalar) || next.start != end {
                    break;
                }
                end = next.end;
                original.push(next.scalar);
                j += 1;
            }

            trace!(start = current.start, end, chars = j - i, "Merged Tags run");

            findings.push(Finding {
                start: current.start,
                end,
                replacement: decode_run(&original),
                original,
                class: FindingClass::Tags,
            });
            i = j;
        } else {
            let class = FindingClass::of(current.scalar);
            let codepoint = current.scalar as u32;
            let replacement = match class {
                FindingClass::Watermark => label(watermark_name(codepoint), codepoint),
                _ => label(zero_width_name(codepoint), codepoint),
            };

            findings.push(Finding {
                start: current.start,
                end: current.end,
                original: String::from(current.scalar),
                replacement,
                class,
            });
            i += 1;
        }
    }

    findings
}

/// Renders `text` with every finding replaced by its visible rendering.
///
/// Tags runs become `[Tags: <message>]`; other characters become their
/// bracketed labels. Visible text is preserved as-is.
pub fn reveal(text: &str, sensitivity: Sensitivity) -> String {
    let findings = find_hidden(text, sensitivity);
    let mut revealed = String::with_capacity(text.len());
    let mut pending = findings.iter().peekable();
    let mut offset = 0;

    for c in text.chars() {
        let start = offset;
        offset += c.len_utf16();

        match pending.peek() {
            Some(finding) if start >= finding.start => {
                if offset >= finding.end {
                    revealed.push_str(&finding.render());
                    pending.next();
                }
            }
            _ => revealed.push(c),
        }
    }

    revealed
}
