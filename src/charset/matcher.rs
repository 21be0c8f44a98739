//! Compiled per-tier matcher.
//!
//! A tier's ranges are sorted once into a flat interval list and searched
//! with a binary search per scalar value. One matcher per tier is built on
//! first use and shared for the life of the process.

use std::sync::OnceLock;

use super::ranges::Sensitivity;

/// A single flagged scalar found in scanned text.
///
/// Offsets are UTF-16 code units. Supplementary-plane characters such as
/// Tags block codepoints span two units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch {
    /// Offset of the first code unit (inclusive).
    pub start: usize,
    /// Offset past the last code unit (exclusive).
    pub end: usize,
    /// The matched scalar value, which is also the full matched substring.
    pub scalar: char,
}

/// A union-of-ranges matcher for one sensitivity tier.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    sensitivity: Sensitivity,
    /// Sorted, non-overlapping inclusive intervals.
    intervals: Vec<(u32, u32)>,
}

impl CompiledMatcher {
    /// Compiles the matcher for `sensitivity`.
    ///
    /// Prefer [`classify`], which returns the cached instance.
    pub fn compile(sensitivity: Sensitivity) -> Self {
        let mut sorted: Vec<(u32, u32)> = sensitivity
            .ranges()
            .iter()
            .map(|range| (range.start, range.end))
            .collect();
        sorted.sort_unstable();

        // Coalesce overlapping or touching intervals so the search can
        // assume at most one candidate per codepoint.
        let mut intervals: Vec<(u32, u32)> = Vec::with_capacity(sorted.len());
        for (start, end) in sorted {
            match intervals.last_mut() {
                Some(last) if start <= last.1.saturating_add(1) => last.1 = last.1.max(end),
                _ => intervals.push((start, end)),
            }
        }

        Self {
            sensitivity,
            intervals,
        }
    }

    /// The tier this matcher was compiled for.
    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// Returns true if `codepoint` falls in any active range.
    pub fn contains(&self, codepoint: u32) -> bool {
        let idx = self
            .intervals
            .partition_point(|&(start, _)| start <= codepoint);
        idx > 0 && codepoint <= self.intervals[idx - 1].1
    }

    /// Returns true if `c` falls in any active range.
    pub fn is_match(&self, c: char) -> bool {
        self.contains(c as u32)
    }

    /// Iterates over every flagged scalar in `text`, left to right.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = RawMatch> + 'a {
        self.scan(text.chars().map(|c| (Some(c), c.len_utf16())))
    }

    /// Iterates over every flagged scalar in raw UTF-16 code units.
    ///
    /// Unpaired surrogates are never flagged and occupy one code unit.
    pub fn find_iter_utf16<'a>(&'a self, units: &'a [u16]) -> impl Iterator<Item = RawMatch> + 'a {
        let scalars = char::decode_utf16(units.iter().copied()).map(|decoded| match decoded {
            Ok(c) => (Some(c), c.len_utf16()),
            Err(_) => (None, 1),
        });
        self.scan(scalars)
    }

    fn scan<'a, I>(&'a self, scalars: I) -> impl Iterator<Item = RawMatch> + 'a
    where
        I: Iterator<Item = (Option<char>, usize)> + 'a,
    {
        let mut offset = 0;
        scalars.filter_map(move |(scalar, width)| {
            let start = offset;
            offset += width;
            let scalar = scalar?;
            self.is_match(scalar).then_some(RawMatch {
                start,
                end: offset,
                scalar,
            })
        })
    }
}

/// Returns the cached compiled matcher for `sensitivity`.
pub fn classify(sensitivity: Sensitivity) -> &'static CompiledMatcher {
    static MATCHERS: OnceLock<[CompiledMatcher; 3]> = OnceLock::new();
    let matchers = MATCHERS.get_or_init(|| Sensitivity::ALL.map(CompiledMatcher::compile));
    &matchers[sensitivity as usize]
}

/// Returns true if `codepoint` counts as hidden at `sensitivity`.
///
/// Total over the whole codepoint space, including values that are not
/// valid scalars.
pub fn is_flagged(codepoint: u32, sensitivity: Sensitivity) -> bool {
    classify(sensitivity).contains(codepoint)
}
