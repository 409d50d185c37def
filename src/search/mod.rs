// src/search/mod.rs
// =============================================================================
// The search engine: breadth-first search over the lazily-discovered
// article graph.
//
// Submodules:
// - frontier: arena of discovered nodes, doubles as the FIFO queue
// - engine: the BFS loop itself
// - control: progress events and cancellation
//
// This file holds the public configuration and result types.
// =============================================================================

mod control;
mod engine;
mod frontier;

pub use control::{Cancellation, ProgressEvent, ProgressHook};
pub use engine::{find_path, Searcher};

use std::time::Duration;

use serde::Serialize;

/// Limits on how much work a search may do.
///
/// The live article graph is effectively infinite, so a search for an
/// unreachable target only ends when one of these runs out. Every field
/// defaults to "no limit".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Budget {
    /// Longest path (in links) worth looking for
    pub max_depth: Option<usize>,
    /// Most nodes that may be expanded (pages fetched)
    pub max_expansions: Option<usize>,
    /// Wall-clock limit for the whole search
    pub time_limit: Option<Duration>,
}

/// Which budget ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetKind {
    Depth,
    Expansions,
    Time,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub budget: Budget,
    /// How many nodes of the same BFS level may be expanded at once
    pub concurrency: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: Budget::default(),
            concurrency: 1,
        }
    }
}

/// A chain of articles from start to target, each linking to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<String>);

impl Path {
    pub(crate) fn new(nodes: Vec<String>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self(nodes)
    }

    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    /// Number of links followed, i.e. nodes minus one.
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> &str {
        &self.0[0]
    }

    pub fn target(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    pub fn into_nodes(self) -> Vec<String> {
        self.0
    }
}

/// How a search ended. None of these are errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A shortest path was found
    Found { path: Path },
    /// Every reachable node was expanded and the target was not among them
    NotFound,
    /// A budget ran out first; a bigger budget might still find a path
    BudgetExceeded { budget: BudgetKind },
    /// The caller cancelled the search
    Cancelled,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found { path } => Some(path),
            _ => None,
        }
    }
}

/// Counters collected during a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes whose links were requested (including failed fetches)
    pub expanded: usize,
    /// Expansions that failed and counted as "no links"
    pub failed: usize,
    /// Distinct nodes discovered, start included
    pub discovered: usize,
    /// Deepest BFS level that was expanded
    pub deepest_level: usize,
    pub elapsed_ms: u64,
}

/// Outcome plus stats, as returned by Searcher::run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    #[serde(flatten)]
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}
