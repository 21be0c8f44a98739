//! # Invisible Unicode - Reveal what text is hiding
//!
//! Detects, classifies, and reversibly encodes invisible Unicode characters
//! hidden inside ordinary text.
//!
//! ## Overview
//!
//! Hidden payloads come in two shapes:
//! - **Tags steganography**: printable ASCII shifted into the Unicode Tags block
//!   (U+E0000-U+E007F), which renders as nothing at all
//! - **Loose invisibles**: zero-width characters, direction marks, and atypical
//!   spaces that some generators leave behind as a "watermark"
//!
//! Which codepoints count as hidden is controlled by a [`Sensitivity`] tier.
//! Each tier is a strict superset of the one below it.
//!
//! ## Example Usage
//!
//! ```rust
//! use invisible_unicode::{decode, encode, find_hidden, FindingClass, Sensitivity};
//!
//! // Hide a message and embed it in visible text
//! let hidden = encode("meet at noon").unwrap();
//! let text = format!("Nothing to see here.{hidden}");
//!
//! // Scan reveals the merged run with its decoded content
//! let findings = find_hidden(&text, Sensitivity::Standard);
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].class, FindingClass::Tags);
//! assert_eq!(findings[0].replacement, "meet at noon");
//!
//! // Decode folds the hidden message back into plain text
//! assert_eq!(decode(&hidden), "meet at noon");
//! ```
//!
//! ## Modules
//!
//! - [`charset`]: Sensitivity tiers, range tables, compiled matchers, and names
//! - [`encoder`]: ASCII to Tags block encoding
//! - [`decoder`]: Tags block decoding with tier-aware stripping (never fails)
//! - [`scanner`]: Finding hidden characters with UTF-16 offsets (never fails)
//! - [`report`]: Structured JSON export of scan findings
//! - [`config`]: Persisted CLI settings
//! - [`snippets`]: Saved library of named invisible snippets

pub mod charset;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod report;
pub mod scanner;
pub mod snippets;

// Re-export commonly used types at the crate root
pub use charset::{classify, is_flagged, CodepointRange, CompiledMatcher, RawMatch, Sensitivity};
pub use config::{ConfigError, Settings};
pub use decoder::{decode, decode_run, decode_with_config, DecoderConfig};
pub use encoder::{encode, encode_with_config, EncoderConfig, EncoderError};
pub use report::{ReportError, ScanReport};
pub use scanner::{find_hidden, find_hidden_utf16, reveal, Finding, FindingClass};
pub use snippets::{Snippet, SnippetError, SnippetLibrary};
