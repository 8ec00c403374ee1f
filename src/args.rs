use crate::config::DOTENV_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments for a brochure run

#[derive(Parser, Debug)]
#[command(name = "yield-brochure")]
#[command(about = "Generates a humorous company brochure from the company's landing page")]
#[command(version)]
pub struct Args {
    /// Company name (quote it if it contains spaces)
    pub company_name: String,

    /// Landing page URL (http or https)
    pub url: String,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model identifier, overrides configuration and environment
    #[arg(short, long)]
    pub model: Option<String>,

    /// Directory to write the brochure into (defaults to the current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Dotenv file read for the API key and overrides; a missing file is ignored
    #[arg(long, default_value = DOTENV_FILE)]
    pub env_file: PathBuf,
}
