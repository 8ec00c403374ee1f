/// Keywords that mark a link as worth showing the model
pub const RELEVANT_KEYWORDS: [&str; 2] = ["about", "careers"];

/// Returns true if the link contains any relevant keyword, ignoring case.
///
/// This is a plain substring match over the whole link, so query strings and
/// unrelated words (`/about-the-weather`) count too.
pub fn is_relevant(link: &str) -> bool {
    let lower = link.to_lowercase();
    RELEVANT_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Keeps the relevant links, preserving order and duplicates
pub fn filter_links(links: &[String]) -> Vec<String> {
    links
        .iter()
        .filter(|link| is_relevant(link))
        .cloned()
        .collect()
}
