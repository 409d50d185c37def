// src/lib.rs
// =============================================================================
// wiki-race: find the shortest chain of links between two Wikipedia articles.
//
// Every article is a node; its outgoing links are edges. Nobody has the
// whole graph, so edges are discovered one page at a time while a
// breadth-first search walks outward from the start article.
//
// Layers, leaves first:
// - fetch:   PageFetcher trait + reqwest-based HttpFetcher
// - extract: LinkExtractor trait + regex and DOM-based extractors
// - oracle:  EdgeOracle (fetch + extract + article filter)
// - search:  the BFS engine, budgets, cancellation, progress events
// - dump:    optional on-disk copies of pages and link sets for debugging
// =============================================================================

pub mod dump;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod oracle;
pub mod search;

pub use error::{FetchError, SearchError};
pub use oracle::{article_url, ArticleFilter, EdgeOracle, WikiOracle};
pub use search::{
    find_path, Budget, BudgetKind, Cancellation, Path, ProgressEvent, SearchConfig,
    SearchOutcome, SearchReport, SearchStats, Searcher,
};
