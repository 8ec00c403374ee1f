use crate::parsers::PageContent;

/// Instruction sent as the system message on every run
pub const SYSTEM_PROMPT: &str = "You are an assistant that analyzes the contents of several relevant pages from a company website \
and creates a short humorous, entertaining, jokey brochure using pirate language about the company \
for prospective customers, investors, and recruits. Respond in markdown. \
Include details of company culture, customers, and careers/jobs if you have the information.";

/// System and user instructions for a single model call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Builds the prompt pair for a company from its extracted page and filtered links.
///
/// The page body is passed through untruncated.
pub fn build_prompt(company_name: &str, content: &PageContent, links: &[String]) -> PromptPair {
    let user = format!(
        "You are looking at a company called: {}\n\
         Here are the contents of its landing page and other relevant pages:\n\
         {}\n\
         Relevant links:\n{}",
        company_name,
        content.contents(),
        links.join("\n")
    );

    ::log::debug!(
        "Built prompt: {} system chars, {} user chars",
        SYSTEM_PROMPT.len(),
        user.len()
    );

    PromptPair {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
