//! Header extraction: intro label, headline and lead paragraph.

use dom_query::Document;
use tracing::warn;

use crate::dom;
use crate::options::Selectors;
use crate::{Error, Result};

/// Extract the three header blocks in fixed order: intro, headline, lead.
///
/// Each block is the text of the first element matching its selector. A
/// selector with no match fails the whole extraction; nothing partial is
/// returned.
pub fn extract_header(doc: &Document, selectors: &Selectors) -> Result<[String; 3]> {
    let root = doc.select("html");
    let field = |name: &'static str, selector: &str| {
        dom::first_match(&root, selector)
            .map(|sel| dom::text_content(&sel).to_string())
            .ok_or_else(|| {
                warn!(field = name, selector, "header element missing");
                Error::MissingElement {
                    field: name,
                    selector: selector.to_string(),
                }
            })
    };

    Ok([
        field("intro", &selectors.intro)?,
        field("headline", &selectors.headline)?,
        field("lead", &selectors.lead)?,
    ])
}
