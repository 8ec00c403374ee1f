use crate::error::{BrochureError, Result};
use crate::llm::client::ModelClient;
use crate::prompt::PromptPair;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

/// Client for an OpenAI-compatible chat-completions endpoint
pub struct OpenAiClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a client for `api_base` (e.g. `https://api.openai.com/v1`)
    pub fn new(api_key: &str, model: &str, api_base: &str) -> Result<Self> {
        let endpoint = format!("{}/chat/completions", api_base.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint).map_err(|e| {
            BrochureError::Configuration(format!("invalid API base URL {}: {}", api_base, e))
        })?;

        let client = Client::builder()
            .build()
            .map_err(|e| BrochureError::Configuration(format!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl ModelClient for OpenAiClient {
    async fn complete(&self, prompt: &PromptPair) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
        };

        ::log::info!("Requesting completion from model {}", self.model);
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BrochureError::ModelInvocation(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet = body.chars().take(200).collect::<String>();
            return Err(BrochureError::ModelInvocation(format!(
                "HTTP {}: {}",
                status, snippet
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| BrochureError::ModelInvocation(format!("invalid response: {}", e)))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                BrochureError::ModelInvocation("model returned no content".to_string())
            })?;

        ::log::debug!("Model returned {} chars", text.len());
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::SYSTEM_PROMPT;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn prompt() -> PromptPair {
        PromptPair {
            system: SYSTEM_PROMPT.to_string(),
            user: "You are looking at a company called: Acme".to_string(),
        }
    }

    fn client_for(server: &MockServer) -> OpenAiClient {
        OpenAiClient::new("sk-test", "gpt-4o-mini", &format!("{}/v1/", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_sends_two_messages_and_returns_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": SYSTEM_PROMPT },
                    { "role": "user", "content": "You are looking at a company called: Acme" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "index": 0, "message": { "role": "assistant", "content": "# Ahoy, Acme!" } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let text = client.complete(&prompt()).await.unwrap();
        assert_eq!(text, "# Ahoy, Acme!");
        assert_eq!(client.model_name(), "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_error_status_is_model_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        match client_for(&server).complete(&prompt()).await {
            Err(BrochureError::ModelInvocation(message)) => {
                assert!(message.contains("401"));
                assert!(message.contains("invalid api key"));
            }
            other => panic!("expected model error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_null_content_is_model_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [ { "message": { "role": "assistant", "content": null } } ]
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).complete(&prompt()).await;
        assert!(matches!(result, Err(BrochureError::ModelInvocation(_))));
    }

    #[tokio::test]
    async fn test_no_choices_is_model_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let result = client_for(&server).complete(&prompt()).await;
        assert!(matches!(result, Err(BrochureError::ModelInvocation(_))));
    }

    #[test]
    fn test_invalid_base_is_configuration_error() {
        let result = OpenAiClient::new("sk-test", "gpt-4o-mini", "not a url");
        assert!(matches!(result, Err(BrochureError::Configuration(_))));
    }
}
