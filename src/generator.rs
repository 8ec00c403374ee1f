use crate::config::BrochureConfig;
use crate::error::Result;
use crate::fetchers::{PageFetcher, WebFetcher};
use crate::filter::filter_links;
use crate::llm::{ModelClient, OpenAiClient};
use crate::parsers::html;
use crate::prompt::build_prompt;
use crate::results::{BrochureDocument, SavedBrochure};
use std::fmt;
use std::path::PathBuf;

/// Steps of a single brochure run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Fetching,
    Extracting,
    Filtering,
    PromptBuilding,
    ModelInvocation,
    Writing,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Fetching => "fetching",
            Stage::Extracting => "extracting",
            Stage::Filtering => "filtering",
            Stage::PromptBuilding => "prompt building",
            Stage::ModelInvocation => "model invocation",
            Stage::Writing => "writing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    ::log::debug!("Stage {} -> {}", stage, next);
    *stage = next;
}

/// Fetches a company page and turns it into a saved brochure
pub struct BrochureGenerator {
    fetcher: Box<dyn PageFetcher>,
    model: Box<dyn ModelClient>,
    output_dir: PathBuf,
}

impl BrochureGenerator {
    /// Create a generator from a configuration, rejecting it if the credential is missing
    pub fn new(config: &BrochureConfig) -> Result<Self> {
        let api_key = config.validate()?;
        let fetcher = WebFetcher::new()?;
        let model = OpenAiClient::new(api_key, &config.model, &config.api_base)?;

        Ok(Self {
            fetcher: Box::new(fetcher),
            model: Box::new(model),
            output_dir: config.output_dir.clone(),
        })
    }

    /// Create a generator from explicit collaborators
    pub fn with_clients(
        fetcher: impl PageFetcher + 'static,
        model: impl ModelClient + 'static,
    ) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            model: Box::new(model),
            output_dir: PathBuf::new(),
        }
    }

    /// Set the directory brochures are written into
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Run the whole pipeline for one company.
    ///
    /// Any failure aborts the run; the brochure file is only written after the
    /// model has returned content.
    pub async fn create_brochure(&self, company_name: &str, url: &str) -> Result<SavedBrochure> {
        let mut stage = Stage::Idle;
        let result = self.run(company_name, url, &mut stage).await;

        match &result {
            Ok(saved) => {
                advance(&mut stage, Stage::Done);
                ::log::info!(
                    "Brochure for {} written to {}",
                    company_name,
                    saved.path.display()
                );
            }
            Err(e) => {
                ::log::error!("Brochure generation failed during {}: {}", stage, e);
                advance(&mut stage, Stage::Failed);
            }
        }

        result
    }

    async fn run(&self, company_name: &str, url: &str, stage: &mut Stage) -> Result<SavedBrochure> {
        advance(stage, Stage::Fetching);
        let page = self.fetcher.fetch(url).await?;

        advance(stage, Stage::Extracting);
        let content = html::extract(&page.body);
        ::log::info!(
            "Found {} links in {} (HTTP {})",
            content.links.len(),
            page.url,
            page.status
        );

        advance(stage, Stage::Filtering);
        let relevant = filter_links(&content.links);
        ::log::info!("{} links look relevant", relevant.len());

        advance(stage, Stage::PromptBuilding);
        let prompt = build_prompt(company_name, &content, &relevant);

        advance(stage, Stage::ModelInvocation);
        ::log::info!("Generating brochure with {}", self.model.model_name());
        let body = self.model.complete(&prompt).await?;

        advance(stage, Stage::Writing);
        let document = BrochureDocument::new(company_name.to_string(), body);
        let path = document.save_in(&self.output_dir)?;

        Ok(SavedBrochure { document, path })
    }
}
