// src/fetch/mod.rs
// =============================================================================
// This module retrieves article pages.
//
// Submodules:
// - http: the real fetcher, built on reqwest
//
// The PageFetcher trait is the seam between the search and the network.
// The edge oracle only ever talks to a PageFetcher, so tests can swap in
// an in-memory implementation and never touch the internet.
// =============================================================================

mod http;

pub use http::{HttpFetcher, HttpFetcherConfig};

use async_trait::async_trait;

use crate::error::FetchError;

/// Something that can turn a URL into page content.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the body as text.
    ///
    /// Fails on transport errors and on any non-2xx response.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
