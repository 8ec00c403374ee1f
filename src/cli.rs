use crate::args::Args;
use crate::config::{BrochureConfig, read_dotenv};
use crate::error::Result;
use crate::generator::BrochureGenerator;
use crate::results::SavedBrochure;
use crate::utils::parse_target_url;

/// Runs one brochure generation for parsed command line arguments.
///
/// `env` looks up process environment variables. Values from the dotenv file
/// take precedence over it, and command line flags take precedence over both.
/// The URL and the credential are checked before any request is made.
pub async fn run<F>(args: &Args, env: F) -> Result<SavedBrochure>
where
    F: Fn(&str) -> Option<String>,
{
    let url = parse_target_url(&args.url)?;

    let dotenv = read_dotenv(&args.env_file)?;
    let lookup = |key: &str| {
        dotenv
            .get(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
            .or_else(|| env(key))
    };

    let mut config = BrochureConfig::load(args.config.as_deref())?.with_overrides_from(lookup);
    if let Some(model) = &args.model {
        config = config.with_model(model.clone());
    }
    if let Some(dir) = &args.output_dir {
        config = config.with_output_dir(dir.clone());
    }

    let generator = BrochureGenerator::new(&config)?;

    ::log::info!("Generating brochure for {} from {}", args.company_name, url);
    generator
        .create_brochure(&args.company_name, url.as_str())
        .await
}
