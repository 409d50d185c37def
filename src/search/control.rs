// src/search/control.rs
// =============================================================================
// Hooks the caller can use to watch or stop a running search.
//
// - ProgressEvent / ProgressHook: a callback invoked as nodes are expanded.
//   Purely informational; the search behaves the same with or without it.
// - Cancellation: a cloneable handle. Calling cancel() from anywhere (a
//   Ctrl-C handler, another task) makes the search return Cancelled at the
//   next opportunity, dropping any in-flight fetches.
//
// Rust concepts:
// - Box<dyn Fn>: storing a closure whose concrete type we don't know
// - tokio::sync::watch: a channel that always holds the latest value
// =============================================================================

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::FetchError;

/// Something that happened during a search.
#[derive(Debug)]
pub enum ProgressEvent<'a> {
    /// A node was expanded
    Expanded {
        node: &'a str,
        depth: usize,
        /// Links accepted by the oracle
        neighbors: usize,
        /// Of those, how many had not been seen before
        new_nodes: usize,
        /// Expansions so far, this one included
        expanded: usize,
    },
    /// A node could not be expanded and contributes no links
    ExpandFailed {
        node: &'a str,
        depth: usize,
        error: &'a FetchError,
    },
    /// Every node at `depth` has been expanded
    LevelCompleted { depth: usize, pending: usize },
}

/// Callback receiving progress events.
pub type ProgressHook = Box<dyn Fn(&ProgressEvent<'_>) + Send + Sync>;

/// Lets a caller stop a search from the outside.
#[derive(Debug, Clone)]
pub struct Cancellation {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellation {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once cancel() has been called.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as self, so this only returns on cancel
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}
