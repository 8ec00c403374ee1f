pub mod html;


/// Title used when a page has no usable `<title>`
pub const NO_TITLE: &str = "No title found";

/// Structured content extracted from one fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// Page title, or [`NO_TITLE`]
    pub title: String,
    /// Visible body text, one text node per line
    pub text: String,
    /// Anchor targets in document order
    pub links: Vec<String>,
}

impl PageContent {
    /// Creates page content, substituting the sentinel for a blank title.
    ///
    /// The title is trimmed, and a title that is empty after trimming counts as
    /// missing, so the prompt never shows an empty title line.
    pub fn new(title: Option<String>, text: String, links: Vec<String>) -> Self {
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NO_TITLE.to_string());

        Self { title, text, links }
    }

    /// Renders title and body the way the prompt expects them
    pub fn contents(&self) -> String {
        format!(
            "Webpage Title:\n{}\nWebpage Contents:\n{}\n\n",
            self.title, self.text
        )
    }
}
