// src/fetch/http.rs
// =============================================================================
// This module fetches article pages over HTTP.
//
// Key functionality:
// - Makes GET requests with a timeout and a redirect limit
// - Treats any non-2xx response as a failure
// - Categorizes transport failures (timeout, DNS/connect, redirects, ...)
// - Optionally sends requests to a mirror instead of the canonical host
// - Optionally dumps every fetched page to disk for debugging
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling
// - Builder pattern: reqwest::Client::builder()
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::{Position, Url};

use super::PageFetcher;
use crate::dump::DumpDir;
use crate::error::FetchError;

/// Settings for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Redirects to follow before giving up. Wikipedia serves redirect pages
    /// (e.g. /wiki/Pets) as HTTP redirects, so this should be above zero.
    pub max_redirects: usize,
    pub user_agent: String,
    /// Send requests to this origin instead of the URL's own host
    pub mirror: Option<Url>,
    /// Where to dump fetched pages, if anywhere
    pub dump: Option<DumpDir>,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_redirects: 5,
            user_agent: format!(
                "{}/{} (shortest-path link explorer)",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
            mirror: None,
            dump: None,
        }
    }
}

/// Fetches pages with a shared reqwest client.
///
/// The client is reused for every request so connections get pooled.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    mirror: Option<Url>,
    dump: Option<DumpDir>,
}

impl HttpFetcher {
    pub fn new(config: HttpFetcherConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            client,
            mirror: config.mirror,
            dump: config.dump,
        })
    }

    /// Sends every request to `origin` (scheme, host and port) while keeping
    /// the path and query of the requested URL.
    pub fn with_mirror(mut self, origin: Url) -> Self {
        self.mirror = Some(origin);
        self
    }

    pub fn with_dump(mut self, dump: DumpDir) -> Self {
        self.dump = Some(dump);
        self
    }

    // Works out which URL actually goes on the wire
    fn request_url(&self, url: &str) -> Result<Url, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        match &self.mirror {
            None => Ok(parsed),
            Some(origin) => {
                // "/wiki/Dog?x=1" part of the canonical URL
                let path_and_query = &parsed[Position::BeforePath..Position::AfterQuery];
                origin
                    .join(path_and_query)
                    .map_err(|e| FetchError::InvalidUrl {
                        url: url.to_string(),
                        reason: e.to_string(),
                    })
            }
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let request_url = self.request_url(url)?;
        debug!("GET {}", request_url);

        let response = self
            .client
            .get(request_url)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(|e| categorize_error(url, e))?;

        if let Some(dump) = &self.dump {
            dump.write_page(url, &html);
        }

        Ok(html)
    }
}

// Turns a reqwest error into one of our FetchError categories
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_redirect() {
        FetchError::TooManyRedirects { url }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            reason: error.to_string(),
        }
    } else {
        FetchError::Transport {
            url,
            reason: error.to_string(),
        }
    }
}
