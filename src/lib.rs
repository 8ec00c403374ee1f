//! Generates a themed marketing brochure for a company from its landing page.
//!
//! The pipeline fetches one page, extracts its title, body text and links,
//! keeps the links that look like "about" or "careers" pages, asks a hosted
//! language model for a markdown brochure, and writes it to
//! `<company_name>_brochure.md`.

// Re-export modules
pub mod args;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod filter;
pub mod generator;
pub mod llm;
pub mod parsers;
pub mod prompt;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::BrochureConfig;
pub use error::{BrochureError, Result};
pub use generator::{BrochureGenerator, Stage};
pub use parsers::PageContent;
pub use prompt::PromptPair;
pub use results::{BrochureDocument, SavedBrochure};
