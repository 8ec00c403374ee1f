pub mod fetcher;
pub mod web;

pub use fetcher::{FetchedPage, PageFetcher};
pub use web::{BROWSER_USER_AGENT, WebFetcher};
