//! Decoding of obfuscated paragraphs.
//!
//! Links inside an obfuscated paragraph are served as clear text. Their
//! labels are located in the paragraph's raw text and masked so the cipher
//! does not garble them.

use dom_query::{Document, Selection};
use tracing::trace;

use crate::cipher::IgnoreRanges;
use crate::dom;
use crate::options::{AnchorPolicy, Options};

/// Character range of the first occurrence of `needle` in `haystack`.
///
/// Returns `None` for an empty or absent needle.
#[must_use]
pub fn find_char_range(haystack: &str, needle: &str) -> Option<std::ops::Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    let byte_start = haystack.find(needle)?;
    let start = haystack[..byte_start].chars().count();
    Some(start..start + needle.chars().count())
}

/// Mask of clear-text anchor labels inside one paragraph.
#[must_use]
pub fn anchor_ranges(paragraph: &Selection, text: &str, options: &Options) -> IgnoreRanges {
    let anchors = dom::each_match(paragraph, &options.selectors.anchor);
    let ranges = anchors
        .iter()
        .filter_map(|a| find_char_range(text, &dom::text_content(a)));

    match options.anchor_policy {
        AnchorPolicy::Union => {
            let mut mask = IgnoreRanges::new();
            for range in ranges {
                mask.insert(range);
            }
            mask
        }
        AnchorPolicy::LastOnly => ranges.last().map(IgnoreRanges::single).unwrap_or_default(),
    }
}

/// Decode a single obfuscated paragraph.
#[must_use]
pub fn decode_paragraph(paragraph: &Selection, options: &Options) -> String {
    let text = dom::text_content(paragraph);
    let mask = anchor_ranges(paragraph, &text, options);
    trace!(masked = mask.ranges().len(), "decoding paragraph");
    options.cipher.decode(&text, &mask)
}

/// Lazy iterator over decoded obfuscated paragraphs, in document order.
pub struct DecodedParagraphs<'a, 'o> {
    paragraphs: std::vec::IntoIter<Selection<'a>>,
    options: &'o Options,
}

impl Iterator for DecodedParagraphs<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.paragraphs
            .next()
            .map(|p| decode_paragraph(&p, self.options))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paragraphs.size_hint()
    }
}

impl ExactSizeIterator for DecodedParagraphs<'_, '_> {}

/// Decode every paragraph matching the obfuscated selector.
#[must_use]
pub fn decode_paragraphs<'a, 'o>(
    doc: &'a Document,
    options: &'o Options,
) -> DecodedParagraphs<'a, 'o> {
    let root = doc.select("html");
    DecodedParagraphs {
        paragraphs: dom::each_match(&root, &options.selectors.obfuscated).into_iter(),
        options,
    }
}
