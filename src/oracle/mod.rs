// src/oracle/mod.rs
// =============================================================================
// The edge oracle: given an article, which articles does it link to?
//
// The article graph is far too big to download up front, so edges are
// discovered lazily. Expanding a node means:
// 1. fetch the page (PageFetcher)
// 2. pull every href out of it (LinkExtractor)
// 3. keep only links to articles of the edition we search in, each in its
//    canonical form so "http://.../Dog" and "https://.../Dog" are one node
//    (ArticleFilter)
//
// Submodules:
// - filter: the two-stage article/scope filter
// =============================================================================

mod filter;

pub use filter::{article_url, ArticleFilter, DEFAULT_ARTICLE_PREFIX, DEFAULT_HOST};

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::FetchError;
use crate::extract::LinkExtractor;
use crate::fetch::PageFetcher;

/// Resolves a node to its outgoing edges.
///
/// The search engine only depends on this trait, which is what lets the
/// engine tests run against a small in-memory graph.
#[async_trait]
pub trait EdgeOracle: Send + Sync {
    /// Returns the set of nodes `node` links to.
    ///
    /// An error means this node could not be expanded. Callers treat that as
    /// "no edges" rather than aborting the whole search.
    async fn expand(&self, node: &str) -> Result<HashSet<String>, FetchError>;
}

#[async_trait]
impl<T: EdgeOracle + ?Sized> EdgeOracle for &T {
    async fn expand(&self, node: &str) -> Result<HashSet<String>, FetchError> {
        (**self).expand(node).await
    }
}

/// The real oracle: fetch, extract, filter.
#[derive(Debug, Clone)]
pub struct WikiOracle<F, X> {
    fetcher: F,
    extractor: X,
    filter: ArticleFilter,
}

impl<F, X> WikiOracle<F, X>
where
    F: PageFetcher,
    X: LinkExtractor,
{
    pub fn new(fetcher: F, extractor: X, filter: ArticleFilter) -> Self {
        Self {
            fetcher,
            extractor,
            filter,
        }
    }

    pub fn filter(&self) -> &ArticleFilter {
        &self.filter
    }
}

#[async_trait]
impl<F, X> EdgeOracle for WikiOracle<F, X>
where
    F: PageFetcher,
    X: LinkExtractor,
{
    async fn expand(&self, node: &str) -> Result<HashSet<String>, FetchError> {
        let base = Url::parse(node).map_err(|e| FetchError::InvalidUrl {
            url: node.to_string(),
            reason: e.to_string(),
        })?;

        let content = self.fetcher.fetch(node).await?;
        let raw_links = self.extractor.extract_links(&content, &base);
        let raw_count = raw_links.len();

        let edges: HashSet<String> = raw_links
            .iter()
            .filter_map(|link| self.filter.canonicalize(link))
            .collect();

        debug!(
            "{}: {} raw links, {} accepted",
            node,
            raw_count,
            edges.len()
        );

        Ok(edges)
    }
}
