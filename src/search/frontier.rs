// src/search/frontier.rs
// =============================================================================
// The BFS frontier, stored as an arena.
//
// Every discovered node gets exactly one Entry, appended to a Vec. An entry
// remembers the index of the entry that discovered it, so walking parent
// indices from any entry back to index 0 gives the path from the start.
// Using indices instead of references means no Rc/RefCell and no cycles.
//
// Because nodes are appended in BFS order, the Vec is also the queue:
// a cursor marks the oldest entry not yet expanded, and depths along the
// Vec never decrease.
//
// Rust concepts:
// - Vec as an arena: indices are stable because we only ever push
// - HashSet: the visited set, checked when a node is discovered
// =============================================================================

use std::collections::HashSet;

#[derive(Debug, Clone)]
struct Entry {
    node: String,
    parent: Option<usize>,
    depth: usize,
}

/// Discovered nodes in BFS order, plus the set of nodes already claimed.
#[derive(Debug)]
pub(crate) struct Frontier {
    entries: Vec<Entry>,
    seen: HashSet<String>,
    // Index of the oldest entry that has not been handed out for expansion
    cursor: usize,
}

impl Frontier {
    /// A frontier holding only the start node at depth 0.
    pub(crate) fn new(start: &str) -> Self {
        let mut seen = HashSet::new();
        seen.insert(start.to_string());
        Self {
            entries: vec![Entry {
                node: start.to_string(),
                parent: None,
                depth: 0,
            }],
            seen,
            cursor: 0,
        }
    }

    /// Appends `node` as discovered by entry `parent`.
    ///
    /// Returns the new entry's index, or None if the node was seen before
    /// (enqueued or expanded). A node is therefore enqueued at most once.
    pub(crate) fn push(&mut self, node: String, parent: usize) -> Option<usize> {
        if self.seen.contains(&node) {
            return None;
        }
        let depth = self.entries[parent].depth + 1;
        self.seen.insert(node.clone());
        self.entries.push(Entry {
            node,
            parent: Some(parent),
            depth,
        });
        Some(self.entries.len() - 1)
    }

    /// Depth of the oldest pending entry, or None when the frontier is empty.
    pub(crate) fn peek_depth(&self) -> Option<usize> {
        self.entries.get(self.cursor).map(|entry| entry.depth)
    }

    /// Dequeues up to `max` of the oldest pending entries, stopping at the
    /// first entry that belongs to a deeper level than the head.
    pub(crate) fn pop_level(&mut self, max: usize) -> Vec<usize> {
        let depth = match self.peek_depth() {
            Some(depth) => depth,
            None => return Vec::new(),
        };

        let mut batch = Vec::new();
        while batch.len() < max {
            match self.entries.get(self.cursor) {
                Some(entry) if entry.depth == depth => {
                    batch.push(self.cursor);
                    self.cursor += 1;
                }
                _ => break,
            }
        }
        batch
    }

    pub(crate) fn node(&self, index: usize) -> &str {
        &self.entries[index].node
    }

    pub(crate) fn depth(&self, index: usize) -> usize {
        self.entries[index].depth
    }

    /// Number of entries discovered but not yet handed out.
    pub(crate) fn pending(&self) -> usize {
        self.entries.len() - self.cursor
    }

    /// Number of distinct nodes discovered, start included.
    pub(crate) fn discovered(&self) -> usize {
        self.entries.len()
    }

    /// Walks parent links from `index` back to the start.
    ///
    /// The result is in start-to-`index` order.
    pub(crate) fn path_to(&self, index: usize) -> Vec<String> {
        let mut path = Vec::with_capacity(self.entries[index].depth + 1);
        let mut current = Some(index);
        while let Some(i) = current {
            let entry = &self.entries[i];
            path.push(entry.node.clone());
            current = entry.parent;
        }
        path.reverse();
        path
    }
}
