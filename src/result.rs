//! Result type for decryption output.

use serde::{Deserialize, Serialize};

/// Ordered text blocks recovered from a page.
///
/// Blocks appear as header (intro, headline, lead), then readable body
/// paragraphs, then decoded paragraphs. A successful extraction always has
/// the three header blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Every block in output order.
    pub blocks: Vec<String>,

    /// Number of readable body paragraphs following the header.
    pub body_len: usize,

    /// Number of decoded paragraphs at the end.
    pub decoded_len: usize,
}

impl Article {
    /// Number of leading header blocks.
    pub const HEADER_LEN: usize = 3;

    /// First block, used as the document's name.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.blocks.first().map(String::as_str)
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.blocks[..Self::HEADER_LEN.min(self.blocks.len())]
    }

    #[must_use]
    pub fn body(&self) -> &[String] {
        let start = Self::HEADER_LEN.min(self.blocks.len());
        let end = (start + self.body_len).min(self.blocks.len());
        &self.blocks[start..end]
    }

    #[must_use]
    pub fn decoded(&self) -> &[String] {
        let start = self.blocks.len().saturating_sub(self.decoded_len);
        &self.blocks[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_split_blocks() {
        let article = Article {
            blocks: ["I", "H", "L", "b1", "b2", "d1"].map(String::from).to_vec(),
            body_len: 2,
            decoded_len: 1,
        };
        assert_eq!(article.title(), Some("I"));
        assert_eq!(article.header(), ["I", "H", "L"]);
        assert_eq!(article.body(), ["b1", "b2"]);
        assert_eq!(article.decoded(), ["d1"]);
    }

    #[test]
    fn test_empty_article() {
        let article = Article::default();
        assert_eq!(article.title(), None);
        assert!(article.header().is_empty());
        assert!(article.body().is_empty());
        assert!(article.decoded().is_empty());
    }
}
