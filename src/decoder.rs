//! Tags block decoding.
//!
//! Decoding folds hidden Tags content back into plain text and strips every
//! other invisible character flagged at the active sensitivity tier.
//!
//! This decoder NEVER fails. Characters it does not recognize pass through
//! unchanged; characters it does recognize are either mapped or dropped.

use tracing::debug;

use crate::charset::tags::{from_tag, is_tag, BOM};
use crate::charset::{classify, Sensitivity};

/// Configuration for the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Tier used to decide which non-Tags invisibles are stripped.
    pub sensitivity: Sensitivity,
}

impl DecoderConfig {
    /// Creates a config for the given tier.
    pub fn new(sensitivity: Sensitivity) -> Self {
        Self { sensitivity }
    }
}

/// Decodes text at the default (`Standard`) sensitivity.
pub fn decode(text: &str) -> String {
    decode_with_config(text, &DecoderConfig::default())
}

/// Decodes text with custom configuration.
///
/// In a single left-to-right pass:
/// - a BOM at position 0 is consumed as a legitimate byte order mark
/// - Tags content characters (U+E0020-U+E007E) become their ASCII counterparts
/// - any other Tags block character is dropped
/// - characters flagged at the configured tier are dropped
/// - everything else passes through in order
pub fn decode_with_config(text: &str, config: &DecoderConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let matcher = classify(config.sensitivity);
    let mut output = String::with_capacity(text.len());

    for (position, c) in text.chars().enumerate() {
        if position == 0 && c == BOM {
            continue;
        }

        if let Some(ascii) = from_tag(c) {
            output.push(ascii);
            continue;
        }

        if is_tag(c) || matcher.is_match(c) {
            continue;
        }

        output.push(c);
    }

    debug!(
        sensitivity = %config.sensitivity,
        input_bytes = text.len(),
        output_bytes = output.len(),
        "Decoded text"
    );

    output
}

/// Decodes a run of Tags block characters to ASCII.
///
/// Content characters are mapped back; delimiters, reserved Tags codepoints,
/// and anything outside the Tags block contribute nothing.
pub fn decode_run(text: &str) -> String {
    text.chars().filter_map(from_tag).collect()
}
