//! Rotation cipher used by the obfuscated paragraphs.
//!
//! The page shifts every printable code point by a fixed amount. Decoding
//! walks the text one code point at a time and leaves three things alone:
//! spaces, characters outside the Basic Multilingual Plane, and any position
//! covered by an [`IgnoreRanges`] mask (clear-text link labels).
//!
//! The arithmetic is driven by a [`CipherKey`] so the constants can be tested
//! and swapped independently of the page layout.

use std::ops::Range;

/// Constants of the code point shift.
///
/// Decoding a code point `c` computes `v = c - offset`, then
/// `v -= wrap` if `v > ceiling` else `v += wrap`, and finally
/// `v += high_skip` if `v` still lies above `ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherKey {
    /// Amount subtracted before wrapping.
    pub offset: u32,
    /// Alphabet length used for wrap-around.
    pub wrap: u32,
    /// Highest code point of the primary alphabet (`'z'`).
    pub ceiling: u32,
    /// Extra shift for results that land above `ceiling`.
    pub high_skip: u32,
}

impl CipherKey {
    /// Key matching the magazine's obfuscation.
    ///
    /// Nominally a rot-25, but the data is only readable with an offset of
    /// 27; the net effect on printable ASCII is a shift of one code point.
    pub const SPIEGEL: Self = Self {
        offset: 27,
        wrap: 26,
        ceiling: 'z' as u32,
        high_skip: 52,
    };

    /// Decode one code point.
    ///
    /// Results that are not valid Unicode scalar values leave `c` unchanged.
    #[must_use]
    pub fn decode_char(self, c: char) -> char {
        let ceiling = i64::from(self.ceiling);
        let mut v = i64::from(u32::from(c)) - i64::from(self.offset);
        if v > ceiling {
            v -= i64::from(self.wrap);
        } else {
            v += i64::from(self.wrap);
        }
        if v > ceiling {
            v += i64::from(self.high_skip);
        }
        u32::try_from(v).ok().and_then(char::from_u32).unwrap_or(c)
    }

    /// Encode one code point; the inverse of [`decode_char`](Self::decode_char).
    ///
    /// Only code points up to `ceiling` have a preimage in the low branch of
    /// the shift, so anything above it is returned unchanged.
    #[must_use]
    pub fn encode_char(self, c: char) -> char {
        if c == ' ' || u32::from(c) > self.ceiling {
            return c;
        }
        let v = i64::from(u32::from(c)) + i64::from(self.offset) - i64::from(self.wrap);
        match u32::try_from(v).ok().and_then(char::from_u32) {
            Some(encoded) if self.decode_char(encoded) == c => encoded,
            _ => c,
        }
    }
}

impl Default for CipherKey {
    fn default() -> Self {
        Self::SPIEGEL
    }
}

/// Which cipher decodes obfuscated paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cipher {
    /// Code point shift over the printable range, parameterized by a key.
    Shift(CipherKey),

    /// Classic rot-N over ASCII letters only; everything else passes through.
    Letters {
        /// Positions to rotate forward, modulo 26.
        rotation: u8,
    },
}

impl Default for Cipher {
    fn default() -> Self {
        Self::Shift(CipherKey::SPIEGEL)
    }
}

impl Cipher {
    /// The letters-only variant with the nominal rotation of 25.
    pub const ROT25: Self = Self::Letters { rotation: 25 };

    /// Decode a single code point, ignoring masks.
    #[must_use]
    pub fn decode_char(self, c: char) -> char {
        match self {
            Self::Shift(key) => key.decode_char(c),
            Self::Letters { rotation } => rotate_letter(c, rotation),
        }
    }

    /// Encode a single code point, ignoring masks.
    #[must_use]
    pub fn encode_char(self, c: char) -> char {
        match self {
            Self::Shift(key) => key.encode_char(c),
            Self::Letters { rotation } => rotate_letter(c, 26 - rotation % 26),
        }
    }

    /// Decode `text`, passing masked positions through untouched.
    ///
    /// Positions in `ignore` are character indices, not byte offsets.
    #[must_use]
    pub fn decode(self, text: &str, ignore: &IgnoreRanges) -> String {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                if passes_through(c) || ignore.contains(i) {
                    c
                } else {
                    self.decode_char(c)
                }
            })
            .collect()
    }

    /// Encode `text`. Used to build fixtures for obfuscated pages.
    #[must_use]
    pub fn encode(self, text: &str) -> String {
        text.chars()
            .map(|c| if passes_through(c) { c } else { self.encode_char(c) })
            .collect()
    }
}

/// Spaces and supplementary-plane characters are never shifted.
fn passes_through(c: char) -> bool {
    c == ' ' || c.len_utf16() != 1
}

fn rotate_letter(c: char, rotation: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    // c is ASCII here, so the cast is lossless
    #[allow(clippy::cast_possible_truncation)]
    let offset = (c as u8 - base + rotation % 26) % 26;
    char::from(base + offset)
}

/// Union of half-open character index ranges exempt from decoding.
///
/// Ranges are kept sorted and merged, so lookups stay cheap even when a
/// paragraph contains many links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreRanges {
    ranges: Vec<Range<usize>>,
}

impl IgnoreRanges {
    /// An empty mask.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mask covering a single range.
    #[must_use]
    pub fn single(range: Range<usize>) -> Self {
        let mut mask = Self::new();
        mask.insert(range);
        mask
    }

    /// Add `range` to the mask, merging with overlapping or adjacent ranges.
    pub fn insert(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let at = self.ranges.partition_point(|r| r.end < range.start);
        let mut merged = range;
        while at < self.ranges.len() && self.ranges[at].start <= merged.end {
            let existing = self.ranges.remove(at);
            merged = existing.start.min(merged.start)..existing.end.max(merged.end);
        }
        self.ranges.insert(at, merged);
    }

    /// Whether character index `i` is masked.
    #[must_use]
    pub fn contains(&self, i: usize) -> bool {
        let at = self.ranges.partition_point(|r| r.end <= i);
        self.ranges.get(at).is_some_and(|r| r.contains(&i))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The merged ranges in ascending order.
    #[must_use]
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }
}

/// Decode `text` with the magazine key and no mask.
///
/// # Example
///
/// ```rust
/// use rs_decryptor::cipher::decode_str;
///
/// assert_eq!(decode_str("Ifmmp xpsme"), "Hello world");
/// ```
#[must_use]
pub fn decode_str(text: &str) -> String {
    Cipher::default().decode(text, &IgnoreRanges::new())
}
