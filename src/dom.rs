//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: parsing, text and attribute
//! access, and an ancestor index for structural membership checks.

use std::collections::HashSet;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
///
/// `<noscript>` children parse into real elements, so fallback paragraphs are
/// selectable directly.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Whether the element carries a class attribute with at least one class.
///
/// `class=""` and whitespace-only values count as unclassed.
#[must_use]
pub fn has_class(sel: &Selection) -> bool {
    sel.attr("class").is_some_and(|c| !c.trim().is_empty())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Querying ===

/// First element under `root` matching `selector`, in document order.
#[must_use]
pub fn first_match<'a>(root: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    root.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// Every element under `root` matching `selector`, one selection per node.
#[must_use]
pub fn each_match<'a>(root: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    root.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Structural Membership ===

/// Set of container nodes, precomputed once per document.
///
/// Answers "is this element inside any of these containers" by walking the
/// element's ancestors with O(1) lookups, instead of rescanning the document
/// for every element.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    ids: HashSet<NodeId>,
}

impl NodeIndex {
    /// Index every element under `root` matching `selector`.
    #[must_use]
    pub fn new(root: &Selection, selector: &str) -> Self {
        let ids = root.select(selector).nodes().iter().map(|n| n.id).collect();
        Self { ids }
    }

    /// Whether `sel` has an ancestor in the index.
    ///
    /// The element itself does not count.
    #[must_use]
    pub fn is_descendant_of(&self, sel: &Selection) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        let Some(node) = sel.nodes().first() else {
            return false;
        };
        let mut current = node.parent();
        while let Some(ancestor) = current {
            if self.ids.contains(&ancestor.id) {
                return true;
            }
            current = ancestor.parent();
        }
        false
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert!(has_class(&div));
        assert_eq!(text_content(&div), "content".into());
    }

    #[test]
    fn test_has_class() {
        let doc = parse(r#"<p class="a">1</p><p class="">2</p><p class="  ">3</p><p>4</p>"#);
        let flags: Vec<bool> = each_match(&doc.select("body"), "p")
            .iter()
            .map(has_class)
            .collect();
        assert_eq!(flags, vec![true, false, false, false]);
    }

    #[test]
    fn test_first_match_in_document_order() {
        let doc = parse(r#"<div><span class="x">first</span><span class="x">second</span></div>"#);
        let root = doc.select("html");

        let first = first_match(&root, "span.x").map(|s| text_content(&s).to_string());
        assert_eq!(first.as_deref(), Some("first"));
        assert!(first_match(&root, "span.missing").is_none());
    }

    #[test]
    fn test_noscript_paragraphs_are_selectable() {
        let doc = parse(r#"<div><noscript><p>hidden</p></noscript></div>"#);

        let p = doc.select("noscript p");
        assert!(p.exists());
        assert_eq!(text_content(&p), "hidden".into());
    }

    #[test]
    fn test_escaped_markup_in_noscript_stays_text() {
        let doc = parse("<body><noscript>Use &lt;p&gt;x&lt;/p&gt;</noscript></body>");

        assert!(!doc.select("noscript p").exists());
        assert_eq!(text_content(&doc.select("noscript")), "Use <p>x</p>".into());
    }

    #[test]
    fn test_node_index_ancestry() {
        let doc = parse(
            r#"
            <div id="body">
                <p id="outside">out</p>
                <noscript><div><p id="nested">deep</p></div></noscript>
            </div>
        "#,
        );
        let index = NodeIndex::new(&doc.select("html"), "noscript");

        assert_eq!(index.len(), 1);
        assert!(!index.is_descendant_of(&doc.select("#outside")));
        assert!(index.is_descendant_of(&doc.select("#nested")));
        assert!(!index.is_descendant_of(&doc.select("noscript")));
    }

    #[test]
    fn test_empty_index_matches_nothing() {
        let doc = parse("<p>text</p>");
        let index = NodeIndex::new(&doc.select("html"), "noscript");
        assert!(index.is_empty());
        assert!(!index.is_descendant_of(&doc.select("p")));
    }
}
