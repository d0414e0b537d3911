//! HTML output writer.
//!
//! Wraps every block in a paragraph tag and names the file after the first
//! block.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::result::Article;
use crate::{Error, Result};

/// Characters not allowed in file names on common platforms.
#[allow(clippy::expect_used)]
static ILLEGAL_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#).expect("valid regex")
});

/// Longest file stem we produce, in characters.
const MAX_STEM_CHARS: usize = 200;

/// Render the article as a minimal HTML document.
///
/// Block text is written as-is, without escaping.
#[must_use]
pub fn render_html(article: &Article) -> String {
    let body_len: usize = article.blocks.iter().map(|b| b.len() + 7).sum();
    let mut html = String::with_capacity(body_len + 26);
    html.push_str("<html><body>");
    for block in &article.blocks {
        html.push_str("<p>");
        html.push_str(block);
        html.push_str("</p>");
    }
    html.push_str("</body></html>");
    html
}

/// Turn free text into a safe file stem.
///
/// Returns `None` when nothing usable remains.
#[must_use]
pub fn sanitize_stem(text: &str) -> Option<String> {
    let replaced = ILLEGAL_FILENAME_CHARS.replace_all(text.trim(), "_");
    let stem: String = replaced
        .trim_end_matches(['.', ' '])
        .chars()
        .take(MAX_STEM_CHARS)
        .collect();
    let stem = stem.trim_end().to_string();
    if stem.is_empty() || stem.chars().all(|c| c == '_') {
        None
    } else {
        Some(stem)
    }
}

/// File name for the article: the first block plus `.html`.
pub fn file_name(article: &Article) -> Result<String> {
    let title = article.title().unwrap_or_default();
    sanitize_stem(title)
        .map(|stem| format!("{stem}.html"))
        .ok_or_else(|| Error::InvalidTitle(title.to_string()))
}

/// Write the rendered article into `dir` and return the file path.
pub fn write_article(article: &Article, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(file_name(article)?);
    fs::write(&path, render_html(article)).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), blocks = article.blocks.len(), "wrote article");
    Ok(path)
}
