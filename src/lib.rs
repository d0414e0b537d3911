//! # rs-decryptor
//!
//! Recovers readable article text from pages whose paid section is served
//! as rotation-obfuscated paragraphs.
//!
//! A page is processed in three stages over the parsed document:
//!
//! - **Header**: intro label, headline and lead paragraph
//! - **Body**: readable paragraphs up to the start of the fallback region
//! - **Decoded**: obfuscated paragraphs run through the cipher, with link
//!   labels left as they are
//!
//! The stages' blocks are concatenated in that order into an [`Article`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_decryptor::decrypt;
//!
//! let html = r#"<html><body>
//!   <span class="headline-intro">Intro</span>
//!   <span class="headline">Head</span>
//!   <p class="article-intro">Lead</p>
//!   <div class="column-both-center"><p>Hello world</p></div>
//!   <p class="obfuscated">Tfdsfu ufyu ifsf</p>
//! </body></html>"#;
//!
//! let article = decrypt(html)?;
//! assert_eq!(article.blocks, ["Intro", "Head", "Lead", "Hello world", "Secret text here"]);
//! # Ok::<(), rs_decryptor::Error>(())
//! ```

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Rotation cipher and ignore masks.
pub mod cipher;

/// Header extraction.
pub mod header;

/// Readable body classification.
pub mod body;

/// Obfuscated paragraph decoding.
pub mod obfuscated;

/// Character encoding detection and transcoding.
pub mod encoding;

/// HTML file output.
pub mod output;

// Public API - re-exports
pub use cipher::{Cipher, CipherKey, IgnoreRanges};
pub use dom_query::Document;
pub use error::{Error, Result};
pub use options::{AnchorPolicy, Options, Selectors};
pub use result::Article;

use tracing::debug;

/// Run header, body and decode stages over an already parsed document.
///
/// Only a missing header element fails; empty body or decoded sections are
/// valid results.
pub fn decrypt_document(doc: &Document, options: &Options) -> Result<Article> {
    let header = header::extract_header(doc, &options.selectors)?;
    let mut blocks = Vec::from(header);

    blocks.extend(body::classify_body(doc, &options.selectors));
    let body_len = blocks.len() - Article::HEADER_LEN;

    blocks.extend(obfuscated::decode_paragraphs(doc, options));
    let decoded_len = blocks.len() - Article::HEADER_LEN - body_len;

    debug!(body_len, decoded_len, "decrypted document");
    Ok(Article {
        blocks,
        body_len,
        decoded_len,
    })
}

/// Decrypts an HTML page using default options.
pub fn decrypt(html: &str) -> Result<Article> {
    decrypt_with_options(html, &Options::default())
}

/// Decrypts an HTML page with custom options.
///
/// # Example
///
/// ```rust
/// use rs_decryptor::{decrypt_with_options, Options, Selectors};
///
/// let html = "<h1>T</h1><h2>K</h2><p id='lead'>L</p>";
/// let options = Options {
///     selectors: Selectors {
///         intro: "h2".into(),
///         headline: "h1".into(),
///         lead: "#lead".into(),
///         ..Selectors::default()
///     },
///     ..Options::default()
/// };
/// let article = decrypt_with_options(html, &options)?;
/// assert_eq!(article.blocks, ["K", "T", "L"]);
/// # Ok::<(), rs_decryptor::Error>(())
/// ```
pub fn decrypt_with_options(html: &str, options: &Options) -> Result<Article> {
    let doc = dom::parse(html);
    decrypt_document(&doc, options)
}

/// Decrypts HTML bytes, detecting the character encoding first.
pub fn decrypt_bytes(html: &[u8]) -> Result<Article> {
    decrypt_bytes_with_options(html, &Options::default())
}

/// Decrypts HTML bytes with custom options, detecting the encoding first.
pub fn decrypt_bytes_with_options(html: &[u8], options: &Options) -> Result<Article> {
    let html_str = encoding::transcode_to_utf8(html);
    decrypt_with_options(&html_str, options)
}
