//! Sensitivity tiers and the codepoint range tables behind them.
//!
//! Tiers are nested: every range active at `Standard` is active at
//! `Thorough`, and every range active at `Thorough` is active at `Paranoid`.
//! Each tier table is built from the previous tier's table plus that tier's
//! additions, so the superset property holds by construction.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An inclusive interval of Unicode scalar values with a human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodepointRange {
    /// First codepoint (inclusive).
    pub start: u32,
    /// Last codepoint (inclusive).
    pub end: u32,
    /// Human-readable name for this range.
    pub name: &'static str,
}

impl CodepointRange {
    /// Creates a new range. `start` must not exceed `end`.
    pub const fn new(start: u32, end: u32, name: &'static str) -> Self {
        Self { start, end, name }
    }

    /// Returns true if `codepoint` lies inside this range.
    pub const fn contains(&self, codepoint: u32) -> bool {
        codepoint >= self.start && codepoint <= self.end
    }
}

/// Atypical spaces associated with generated-text fingerprinting.
///
/// U+00A0 is deliberately absent: `&nbsp;` makes it far too common in real pages.
const WATERMARK_RANGES: &[CodepointRange] = &[
    CodepointRange::new(0x2002, 0x2003, "En/Em Space (AI watermark)"),
    CodepointRange::new(0x2009, 0x200A, "Thin/Hair Space (AI watermark)"),
    CodepointRange::new(0x202F, 0x202F, "Narrow No-Break Space (AI watermark)"),
    CodepointRange::new(0x205F, 0x205F, "Medium Mathematical Space (AI watermark)"),
];

const STANDARD_RANGES: &[CodepointRange] = &[
    CodepointRange::new(0xE0000, 0xE007F, "Tags block"),
    CodepointRange::new(0x200B, 0x200F, "Zero-width & direction marks"),
    CodepointRange::new(0xFEFF, 0xFEFF, "BOM / Zero-width no-break space"),
];

/// Standard is the base tier: common invisibles plus watermark spacing.
const STANDARD_ADDITIONS: &[&[CodepointRange]] = &[STANDARD_RANGES, WATERMARK_RANGES];

const THOROUGH_ADDITIONS: &[CodepointRange] = &[
    CodepointRange::new(0x2060, 0x2064, "Invisible operators & word joiner"),
    CodepointRange::new(0xFE00, 0xFE0F, "Variation selectors"),
];

const PARANOID_ADDITIONS: &[CodepointRange] = &[
    CodepointRange::new(0x202A, 0x202E, "Directional overrides"),
    CodepointRange::new(0x2066, 0x2069, "Directional isolates"),
    CodepointRange::new(0x206A, 0x206F, "Deprecated format characters"),
    CodepointRange::new(0x180B, 0x180E, "Mongolian variation selectors"),
    CodepointRange::new(0x00AD, 0x00AD, "Soft hyphen"),
    CodepointRange::new(0x061C, 0x061C, "Arabic letter mark"),
    CodepointRange::new(0x034F, 0x034F, "Combining grapheme joiner"),
];

/// How aggressively non-printing characters are flagged.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Sensitivity {
    /// Tags block, zero-width and direction marks, BOM, watermark spaces.
    #[default]
    Standard,
    /// Standard plus invisible operators, word joiner, variation selectors.
    Thorough,
    /// Thorough plus bidi controls, deprecated format characters, and friends.
    Paranoid,
}

impl Sensitivity {
    /// All tiers, from least to most sensitive.
    pub const ALL: [Sensitivity; 3] = [
        Sensitivity::Standard,
        Sensitivity::Thorough,
        Sensitivity::Paranoid,
    ];

    /// The tier this one extends, if any.
    pub fn previous(self) -> Option<Sensitivity> {
        match self {
            Sensitivity::Standard => None,
            Sensitivity::Thorough => Some(Sensitivity::Standard),
            Sensitivity::Paranoid => Some(Sensitivity::Thorough),
        }
    }

    /// Ranges this tier adds on top of [`Sensitivity::previous`].
    fn additions(self) -> &'static [&'static [CodepointRange]] {
        match self {
            Sensitivity::Standard => STANDARD_ADDITIONS,
            Sensitivity::Thorough => &[THOROUGH_ADDITIONS],
            Sensitivity::Paranoid => &[PARANOID_ADDITIONS],
        }
    }

    /// Every range active at this tier, lower tiers first.
    pub fn ranges(self) -> &'static [CodepointRange] {
        static TABLES: OnceLock<[Vec<CodepointRange>; 3]> = OnceLock::new();
        let tables = TABLES.get_or_init(|| Sensitivity::ALL.map(build_table));
        &tables[self as usize]
    }
}

fn build_table(tier: Sensitivity) -> Vec<CodepointRange> {
    let mut table = tier.previous().map(build_table).unwrap_or_default();
    for additions in tier.additions() {
        table.extend_from_slice(additions);
    }
    table
}

/// Returns the first range at `tier` containing `codepoint`, for labeling.
pub fn range_for(codepoint: u32, tier: Sensitivity) -> Option<&'static CodepointRange> {
    tier.ranges().iter().find(|range| range.contains(codepoint))
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sensitivity::Standard => "standard",
            Sensitivity::Thorough => "thorough",
            Sensitivity::Paranoid => "paranoid",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown sensitivity name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sensitivity '{0}' (expected standard, thorough, or paranoid)")]
pub struct ParseSensitivityError(pub String);

impl FromStr for Sensitivity {
    type Err = ParseSensitivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Sensitivity::Standard),
            "thorough" => Ok(Sensitivity::Thorough),
            "paranoid" => Ok(Sensitivity::Paranoid),
            _ => Err(ParseSensitivityError(s.to_string())),
        }
    }
}
