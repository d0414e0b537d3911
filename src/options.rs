//! Configuration options for decryption.
//!
//! The `Options` struct carries the CSS selectors that locate each part of
//! the page and the cipher parameters used to decode obfuscated paragraphs.

use crate::cipher::Cipher;

/// CSS selectors for every structural element the pipeline reads.
///
/// Defaults match the layout of the magazine pages the tool was written for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    /// Small label shown above the headline. Its text becomes the output
    /// file name.
    ///
    /// Default: `span.headline-intro`
    pub intro: String,

    /// Article headline.
    ///
    /// Default: `span.headline`
    pub headline: String,

    /// Lead paragraph below the headline.
    ///
    /// Default: `p.article-intro`
    pub lead: String,

    /// Paragraphs of the readable body container.
    ///
    /// Default: `.column-both-center p`
    pub body_paragraphs: String,

    /// Fallback containers marking where obfuscated content begins.
    ///
    /// Default: `noscript`
    pub fallback: String,

    /// Paragraphs holding obfuscated text.
    ///
    /// Default: `p.obfuscated`
    pub obfuscated: String,

    /// Clear-text spans inside an obfuscated paragraph.
    ///
    /// Default: `a`
    pub anchor: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            intro: "span.headline-intro".to_string(),
            headline: "span.headline".to_string(),
            lead: "p.article-intro".to_string(),
            body_paragraphs: ".column-both-center p".to_string(),
            fallback: "noscript".to_string(),
            obfuscated: "p.obfuscated".to_string(),
            anchor: "a".to_string(),
        }
    }
}

/// How anchor text spans inside one paragraph are exempted from decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorPolicy {
    /// Exempt the union of every anchor's span.
    #[default]
    Union,

    /// Exempt only the span of the last anchor in the paragraph.
    ///
    /// Earlier anchors in the same paragraph get decoded like cipher text.
    LastOnly,
}

/// Configuration options for decryption.
///
/// # Example
///
/// ```rust
/// use rs_decryptor::{AnchorPolicy, Options};
///
/// let options = Options {
///     anchor_policy: AnchorPolicy::LastOnly,
///     ..Options::default()
/// };
/// assert_eq!(options.selectors.fallback, "noscript");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Selectors for the page structure.
    pub selectors: Selectors,

    /// Cipher used on obfuscated paragraphs.
    ///
    /// Default: `Cipher::Shift(CipherKey::SPIEGEL)`
    pub cipher: Cipher,

    /// Default: `AnchorPolicy::Union`
    pub anchor_policy: AnchorPolicy,
}
