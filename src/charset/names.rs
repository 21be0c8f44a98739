//! Display names for flagged characters.

/// Watermark spaces and their names.
///
/// Used for labeling priority only. Membership testing goes through the
/// tier range tables.
pub const WATERMARK_CHARS: &[(u32, &str)] = &[
    (0x202F, "Narrow No-Break Space"),
    (0x2003, "Em Space"),
    (0x2002, "En Space"),
    (0x2009, "Thin Space"),
    (0x200A, "Hair Space"),
    (0x205F, "Medium Mathematical Space"),
];

/// Curated names for well-known zero-width and format characters.
const ZERO_WIDTH_NAMES: &[(u32, &str)] = &[
    (0x200B, "Zero Width Space"),
    (0x200C, "Zero Width Non-Joiner"),
    (0x200D, "Zero Width Joiner"),
    (0x200E, "Left-to-Right Mark"),
    (0x200F, "Right-to-Left Mark"),
    (0xFEFF, "BOM"),
    (0x2060, "Word Joiner"),
    (0x2061, "Function Application"),
    (0x2062, "Invisible Times"),
    (0x2063, "Invisible Separator"),
    (0x2064, "Invisible Plus"),
    (0x00AD, "Soft Hyphen"),
    (0x061C, "Arabic Letter Mark"),
    (0x034F, "Combining Grapheme Joiner"),
    (0x180E, "Mongolian Vowel Separator"),
];

fn lookup(table: &'static [(u32, &'static str)], codepoint: u32) -> Option<&'static str> {
    table
        .iter()
        .find(|(cp, _)| *cp == codepoint)
        .map(|(_, name)| *name)
}

/// Name of a watermark space, if `codepoint` is one.
pub fn watermark_name(codepoint: u32) -> Option<&'static str> {
    lookup(WATERMARK_CHARS, codepoint)
}

/// Curated name of a zero-width or format character, if known.
pub fn zero_width_name(codepoint: u32) -> Option<&'static str> {
    lookup(ZERO_WIDTH_NAMES, codepoint)
}

/// Formats a codepoint as `U+XXXX` (uppercase, at least four digits).
pub fn format_codepoint(codepoint: u32) -> String {
    format!("U+{:04X}", codepoint)
}

/// Builds a bracketed label: `[Name U+XXXX]`, or `[U+XXXX]` without a name.
pub fn label(name: Option<&str>, codepoint: u32) -> String {
    match name {
        Some(name) => format!("[{} {}]", name, format_codepoint(codepoint)),
        None => format!("[{}]", format_codepoint(codepoint)),
    }
}
