use crate::error::Result;
use crate::prompt::PromptPair;
use async_trait::async_trait;

/// A hosted language model that turns a prompt pair into one completion
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send the system and user messages and return the generated text
    async fn complete(&self, prompt: &PromptPair) -> Result<String>;

    /// Model identifier used for requests
    fn model_name(&self) -> &str;
}
