//! Character classification for hidden Unicode detection.
//!
//! This module provides:
//! - Sensitivity tiers and their codepoint range tables
//! - A compiled, cached matcher per tier
//! - Tags block mapping helpers shared by the codec and scanner
//! - Display names for watermark and zero-width characters

pub mod matcher;
pub mod names;
pub mod ranges;
pub mod tags;

pub use matcher::{classify, is_flagged, CompiledMatcher, RawMatch};
pub use names::{format_codepoint, watermark_name, zero_width_name};
pub use ranges::{range_for, CodepointRange, ParseSensitivityError, Sensitivity};
