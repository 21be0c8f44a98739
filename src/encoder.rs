//! ASCII to Tags block encoding.
//!
//! Every ASCII character is shifted into the Unicode Tags block by adding
//! 0xE0000. The result renders as nothing in virtually every font but
//! survives copy and paste intact.
//!
//! Optionally the output is wrapped in a LANGUAGE TAG / CANCEL TAG pair.
//! Both delimiters sit outside the printable Tags sub-range, so they decode
//! to nothing.

use thiserror::Error;
use tracing::debug;

use crate::charset::tags::{to_tag, TAG_BEGIN, TAG_CANCEL};

/// Errors that can occur during encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncoderError {
    /// The input contained a character outside ASCII (codepoint > 127).
    #[error("Non-ASCII character at position {position}: U+{codepoint:04X} ({character})")]
    NonAsciiCharacter {
        /// Zero-based index of the offending character (in scalar values).
        position: usize,
        /// Codepoint of the offending character.
        codepoint: u32,
        /// The offending character itself.
        character: char,
    },
}

/// Configuration for the encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Wrap the output in U+E0001 (begin) and U+E007F (cancel) delimiters.
    pub wrap: bool,
}

impl EncoderConfig {
    /// Config that wraps output in Tags delimiters.
    pub fn wrapped() -> Self {
        Self { wrap: true }
    }
}

/// Encodes ASCII text into invisible Tags block characters (unwrapped).
///
/// # Errors
/// Returns [`EncoderError::NonAsciiCharacter`] for the first character whose
/// codepoint exceeds 127.
pub fn encode(text: &str) -> Result<String, EncoderError> {
    encode_with_config(text, &EncoderConfig::default())
}

/// Encodes ASCII text with custom configuration.
///
/// Empty input always yields empty output, even when wrapping.
pub fn encode_with_config(text: &str, config: &EncoderConfig) -> Result<String, EncoderError> {
    if text.is_empty() {
        return Ok(String::new());
    }

    // Every Tags codepoint is four bytes in UTF-8
    let mut encoded = String::with_capacity((text.len() + 2) * 4);

    if config.wrap {
        encoded.push(TAG_BEGIN);
    }

    for (position, character) in text.chars().enumerate() {
        let Some(tag) = to_tag(character) else {
            return Err(EncoderError::NonAsciiCharacter {
                position,
                codepoint: character as u32,
                character,
            });
        };
        encoded.push(tag);
    }

    if config.wrap {
        encoded.push(TAG_CANCEL);
    }

    debug!(
        chars = text.len(),
        wrap = config.wrap,
        "Encoded text into Tags block"
    );

    Ok(encoded)
}
