use crate::error::{BrochureError, Result};
use crate::fetchers::fetcher::{FetchedPage, PageFetcher};
use async_trait::async_trait;
use reqwest::Client;

/// Identification header sent with every page request
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";

/// Fetches pages with a plain HTTP GET
pub struct WebFetcher {
    client: Client,
}

impl WebFetcher {
    /// Create a fetcher that identifies as a desktop browser
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| BrochureError::Configuration(format!("HTTP client init failed: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for WebFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let network_error = |message: String| BrochureError::Network {
            url: url.to_string(),
            message,
        };

        ::log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(network_error(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| network_error(e.to_string()))?;

        ::log::info!("Fetched {} ({}, {} bytes)", url, status, body.len());

        Ok(FetchedPage {
            url: url.to_string(),
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("user-agent", BROWSER_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = WebFetcher::new().unwrap();
        let page = fetcher.fetch(&format!("{}/", server.uri())).await.unwrap();

        assert_eq!(page.status, 200);
        assert_eq!(page.body, b"<html></html>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let fetcher = WebFetcher::new().unwrap();
        let url = format!("{}/missing", server.uri());
        match fetcher.fetch(&url).await {
            Err(BrochureError::Network { url: failed, message }) => {
                assert_eq!(failed, url);
                assert!(message.contains("404"));
            }
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let fetcher = WebFetcher::new().unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(BrochureError::Network { .. })));
    }
}
