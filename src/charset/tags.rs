//! Unicode Tags block mapping.
//!
//! ASCII codepoint `n` maps to Tags codepoint `0xE0000 + n`. Only the
//! printable sub-range (U+E0020-U+E007E) maps back to text; the remaining
//! Tags codepoints are delimiters or reserved and decode to nothing.

/// Offset between ASCII and the Tags block.
pub const TAGS_OFFSET: u32 = 0xE0000;

/// First codepoint of the Tags block.
pub const TAGS_BLOCK_START: u32 = 0xE0000;

/// Last codepoint of the Tags block.
pub const TAGS_BLOCK_END: u32 = 0xE007F;

/// First Tags codepoint that decodes to text (tag SPACE).
pub const TAGS_CONTENT_START: u32 = 0xE0020;

/// Last Tags codepoint that decodes to text (tag TILDE).
pub const TAGS_CONTENT_END: u32 = 0xE007E;

/// Wrapper prefix (LANGUAGE TAG).
pub const TAG_BEGIN: char = '\u{E0001}';

/// Wrapper suffix (CANCEL TAG).
pub const TAG_CANCEL: char = '\u{E007F}';

/// Byte order mark / zero-width no-break space.
pub const BOM: char = '\u{FEFF}';

/// Returns true if `c` lies anywhere in the Tags block.
pub fn is_tag(c: char) -> bool {
    (TAGS_BLOCK_START..=TAGS_BLOCK_END).contains(&(c as u32))
}

/// Maps an ASCII character into the Tags block, or `None` if `c` is not ASCII.
pub fn to_tag(c: char) -> Option<char> {
    if c.is_ascii() {
        char::from_u32(c as u32 + TAGS_OFFSET)
    } else {
        None
    }
}

/// Maps a Tags content character back to ASCII.
///
/// Returns `None` for delimiters, reserved Tags codepoints, and anything
/// outside the Tags block.
pub fn from_tag(c: char) -> Option<char> {
    let cp = c as u32;
    if (TAGS_CONTENT_START..=TAGS_CONTENT_END).contains(&cp) {
        char::from_u32(cp - TAGS_OFFSET)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tag_maps_ascii() {
        assert_eq!(to_tag('H'), Some('\u{E0048}'));
        assert_eq!(to_tag('\n'), Some('\u{E000A}'));
        assert_eq!(to_tag('\u{7F}'), Some(TAG_CANCEL));
        assert_eq!(to_tag('é'), None);
        assert_eq!(to_tag('😀'), None);
    }

    #[test]
    fn test_from_tag_only_content_range() {
        assert_eq!(from_tag('\u{E0020}'), Some(' '));
        assert_eq!(from_tag('\u{E007E}'), Some('~'));
        assert_eq!(from_tag(TAG_BEGIN), None);
        assert_eq!(from_tag(TAG_CANCEL), None);
        assert_eq!(from_tag('\u{E0000}'), None);
        assert_eq!(from_tag('A'), None);
    }

    #[test]
    fn test_is_tag_bounds() {
        assert!(is_tag('\u{E0000}'));
        assert!(is_tag('\u{E007F}'));
        assert!(!is_tag('\u{E0080}'));
        assert!(!is_tag('\u{DFFFF}'));
        assert!(!is_tag('a'));
    }
}
