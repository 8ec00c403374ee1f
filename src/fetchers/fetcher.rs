use crate::error::Result;
use async_trait::async_trait;

/// Raw response for a fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Undecoded response body
    pub body: Vec<u8>,
}

/// Retrieves a single page over the network
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url`; non-success responses are errors
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}
