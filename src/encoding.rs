//! Character encoding detection and transcoding.
//!
//! Saved or fetched pages are not always UTF-8. The charset is taken from a
//! byte order mark or a `<meta>` declaration near the top of the document.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::bytes::Regex;
use std::sync::LazyLock;

/// Bytes scanned for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Matches both `<meta charset=...>` and the `http-equiv` content form.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([A-Za-z0-9_:.\-]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// A BOM wins over any declaration. A UTF-16 label in `<meta>` is read as
/// UTF-8, since bytes that matched an ASCII regex cannot be UTF-16.
/// Defaults to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(SNIFF_LEN)];
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_bytes()))
        .map(|encoding| {
            if encoding == UTF_16LE || encoding == UTF_16BE {
                UTF_8
            } else {
                encoding
            }
        })
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use rs_decryptor::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;

    #[test]
    fn detect_from_meta_charset() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(detect_encoding(html), WINDOWS_1252);
    }

    #[test]
    fn detect_from_http_equiv() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // encoding_rs maps latin1 labels to windows-1252 per the WHATWG spec
        assert_eq!(detect_encoding(html), WINDOWS_1252);
    }

    #[test]
    fn bom_overrides_meta() {
        let mut html = vec![0xFF, 0xFE];
        html.extend_from_slice(br#"<meta charset="utf-8">"#);
        assert_eq!(detect_encoding(&html), UTF_16LE);
    }

    #[test]
    fn utf16_meta_label_reads_as_utf8() {
        assert_eq!(detect_encoding(br#"<meta charset="utf-16">"#), UTF_8);
        assert_eq!(detect_encoding(br#"<meta charset="UTF-16BE">"#), UTF_8);
        assert!(transcode_to_utf8(br#"<meta charset="utf-16"><p>Gruss</p>"#).contains("Gruss"));
    }

    #[test]
    fn unknown_label_defaults_to_utf8() {
        let html = br#"<meta charset="klingon">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn transcode_latin1_umlauts() {
        let html = b"<meta charset=\"iso-8859-1\"><p>Gr\xFC\xDFe</p>";
        assert!(transcode_to_utf8(html).contains("Grüße"));
    }

    #[test]
    fn transcode_invalid_utf8_is_lossy() {
        let html = b"<p>bad \xFF byte</p>";
        assert!(transcode_to_utf8(html).contains('\u{FFFD}'));
    }
}
