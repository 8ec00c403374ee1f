use crate::parsers::PageContent;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());
static LINKS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Elements under `<body>` whose content never counts as page text
static NON_CONTENT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body script, body style, body img, body input").unwrap()
});

/// Parses raw HTML bytes into title, cleaned body text and links.
///
/// Never fails: invalid UTF-8 is replaced, a missing title becomes the
/// sentinel, and a missing body yields empty text.
pub fn extract(html: &[u8]) -> PageContent {
    let source = String::from_utf8_lossy(html);
    let mut doc = Html::parse_document(&source);

    let title = extract_title(&doc);
    let links = extract_links(&doc);

    strip_non_content(&mut doc);
    let text = extract_body_text(&doc);

    ::log::debug!("HTML parser found {} links", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).collect::<Vec<_>>()
        );
    }

    PageContent::new(title, text, links)
}

/// Text of the first `<title>` element, if any
pub fn extract_title(doc: &Html) -> Option<String> {
    doc.select(&TITLE)
        .next()
        .map(|title| title.text().collect::<String>())
}

/// Detaches every script, style, image and input element inside the body
pub fn strip_non_content(doc: &mut Html) {
    let ids = doc.select(&NON_CONTENT).map(|e| e.id()).collect::<Vec<_>>();

    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Joins the body's text nodes with newlines, trimming each and skipping blanks
pub fn extract_body_text(doc: &Html) -> String {
    match doc.select(&BODY).next() {
        Some(body) => body
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        None => String::new(),
    }
}

/// Every non-empty `href` of an anchor, in document order
pub fn extract_links(doc: &Html) -> Vec<String> {
    doc.select(&LINKS)
        .filter_map(|e| e.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(|s| s.to_string())
        .collect()
}
