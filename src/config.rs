use crate::error::{BrochureError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable holding the model API credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the model identifier
pub const MODEL_ENV: &str = "BROCHURE_MODEL";

/// Environment variable overriding the model API base URL
pub const API_BASE_ENV: &str = "OPENAI_BASE_URL";

/// Default location of the optional dotenv file
pub const DOTENV_FILE: &str = ".env";

/// Reads `KEY=value` pairs from a dotenv file without touching the process
/// environment. A missing file yields no variables.
pub fn read_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            ::log::debug!("No dotenv file at {}", path.display());
            return Ok(HashMap::new());
        }
        Err(e) => {
            return Err(BrochureError::Configuration(format!(
                "cannot read {}: {}",
                path.display(),
                e
            )));
        }
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| {
            BrochureError::Configuration(format!("invalid dotenv file {}: {}", path.display(), e))
        })?;
        vars.insert(key, value);
    }

    ::log::debug!("Loaded {} variables from {}", vars.len(), path.display());
    Ok(vars)
}

/// Configuration for a brochure run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrochureConfig {
    /// API credential for the model service (never written back out)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Model identifier sent with the completion request
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the chat-completions API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Directory the brochure is written into; empty means the working directory
    #[serde(default)]
    pub output_dir: PathBuf,
}

/// Default model identifier
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Default API base URL
fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

impl Default for BrochureConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_base: default_api_base(),
            output_dir: PathBuf::new(),
        }
    }
}

impl BrochureConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|e| {
                BrochureError::Configuration(format!("cannot read {}: {}", path.display(), e))
            })?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BrochureError::Configuration(format!("invalid configuration: {}", e)))
    }

    /// Load from an optional file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                ::log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply overrides from an arbitrary variable lookup; empty values are ignored
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(api_key) = non_empty(API_KEY_ENV) {
            self.api_key = Some(api_key);
        }
        if let Some(model) = non_empty(MODEL_ENV) {
            self.model = model;
        }
        if let Some(api_base) = non_empty(API_BASE_ENV) {
            self.api_base = api_base;
        }
        self
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Check the configuration is usable and return the API credential
    pub fn validate(&self) -> Result<&str> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                BrochureError::Configuration(format!(
                    "API key is missing. Please set {} in your environment.",
                    API_KEY_ENV
                ))
            })?;

        if self.model.trim().is_empty() {
            return Err(BrochureError::Configuration(
                "model identifier is empty".to_string(),
            ));
        }

        Url::parse(&self.api_base).map_err(|e| {
            BrochureError::Configuration(format!("invalid API base URL {}: {}", self.api_base, e))
        })?;

        Ok(api_key)
    }
}
