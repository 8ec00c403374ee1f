use std::path::PathBuf;
use thiserror::Error;

/// Exit status for wrong arguments or an unusable target URL
pub const EXIT_USAGE: u8 = 2;

/// Exit status for a missing or invalid configuration (e.g. no API key)
pub const EXIT_CONFIGURATION: u8 = 3;

/// Exit status for any failure after the run has started
pub const EXIT_FAILURE: u8 = 1;

/// Errors that can abort brochure generation
#[derive(Error, Debug)]
pub enum BrochureError {
    /// Bad command-line input
    #[error("usage error: {0}")]
    Usage(String),

    /// Missing credential or unusable configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The page could not be fetched or returned a non-success status
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// The model call failed or produced no content
    #[error("model invocation failed: {0}")]
    ModelInvocation(String),

    /// The brochure could not be written to disk
    #[error("failed to write brochure to {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BrochureError>;

impl BrochureError {
    /// Process exit status to report for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            BrochureError::Usage(_) => EXIT_USAGE,
            BrochureError::Configuration(_) => EXIT_CONFIGURATION,
            BrochureError::Network { .. }
            | BrochureError::ModelInvocation(_)
            | BrochureError::FileWrite { .. } => EXIT_FAILURE,
        }
    }
}
