use crate::error::{BrochureError, Result};
use url::Url;

/// Suffix appended to every brochure filename
pub const BROCHURE_SUFFIX: &str = "_brochure.md";

/// Derives the brochure filename from a company name.
///
/// Lowercases and replaces spaces with underscores; nothing else is escaped,
/// so a name containing `/` produces a nested path.
pub fn brochure_filename(company_name: &str) -> String {
    format!(
        "{}{}",
        company_name.to_lowercase().replace(' ', "_"),
        BROCHURE_SUFFIX
    )
}

/// Checks that a target is an absolute http(s) URL
pub fn parse_target_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| BrochureError::Usage(format!("invalid URL {:?}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(BrochureError::Usage(format!(
            "unsupported URL scheme {:?} in {:?}; expected http or https",
            scheme, raw
        ))),
    }
}
