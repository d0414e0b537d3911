use std::fs;

use rs_decryptor::output::{file_name, render_html, write_article};
use rs_decryptor::{decrypt, Error};

const PAGE: &str = r#"
    <span class="headline-intro">Ukraine-Krieg</span>
    <span class="headline">Die Lage am Morgen</span>
    <p class="article-intro">Was heute wichtig ist</p>
    <div class="column-both-center"><p>Erster Absatz</p></div>
    <p class="obfuscated">[xfjufs Bctbu{</p>
"#;

#[test]
fn write_article_names_file_after_first_block() {
    let dir = tempfile::tempdir().expect("temp dir");
    let article = decrypt(PAGE).expect("header present");

    let path = write_article(&article, dir.path()).expect("write succeeds");
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("Ukraine-Krieg.html"));

    let written = fs::read_to_string(&path).expect("file readable");
    assert_eq!(
        written,
        "<html><body><p>Ukraine-Krieg</p><p>Die Lage am Morgen</p>\
         <p>Was heute wichtig ist</p><p>Erster Absatz</p><p>Zweiter Absatz</p></body></html>"
    );
    assert_eq!(written, render_html(&article));
}

#[test]
fn write_article_reports_missing_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("does-not-exist");
    let article = decrypt(PAGE).expect("header present");

    match write_article(&article, &missing) {
        Err(Error::Io { path, .. }) => assert!(path.starts_with(&missing)),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn empty_intro_is_rejected_as_file_name() {
    let html = r#"
        <span class="headline-intro">  </span>
        <span class="headline">H</span>
        <p class="article-intro">L</p>
    "#;
    let article = decrypt(html).expect("header present");
    assert!(matches!(file_name(&article), Err(Error::InvalidTitle(_))));
}
