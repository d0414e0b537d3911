//! Readable body classification.
//!
//! The readable part of an article is a run of plain `<p>` elements in the
//! body container. Obfuscated content follows it inside a fallback
//! container, and the first unclassed paragraph found there ends the run.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom::{self, NodeIndex};
use crate::options::Selectors;

/// Lazy iterator over readable body paragraphs.
///
/// Yields paragraph text in document order and ends for good at the first
/// unclassed paragraph inside a fallback container, even if plain paragraphs
/// follow it.
pub struct BodyParagraphs<'a> {
    paragraphs: std::vec::IntoIter<Selection<'a>>,
    fallback: NodeIndex,
    stopped: bool,
}

impl Iterator for BodyParagraphs<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.stopped {
            return None;
        }
        for p in self.paragraphs.by_ref() {
            if dom::has_class(&p) {
                continue;
            }
            if self.fallback.is_descendant_of(&p) {
                debug!("body ends at fallback container");
                self.stopped = true;
                return None;
            }
            return Some(dom::text_content(&p).to_string());
        }
        self.stopped = true;
        None
    }
}

impl std::iter::FusedIterator for BodyParagraphs<'_> {}

/// Classify the body container's paragraphs.
///
/// Classed paragraphs are decorative and skipped. No matches yields an
/// empty iterator.
#[must_use]
pub fn classify_body<'a>(doc: &'a Document, selectors: &Selectors) -> BodyParagraphs<'a> {
    let root = doc.select("html");
    BodyParagraphs {
        paragraphs: dom::each_match(&root, &selectors.body_paragraphs).into_iter(),
        fallback: NodeIndex::new(&root, &selectors.fallback),
        stopped: false,
    }
}
