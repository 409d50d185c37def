// src/search/engine.rs
// =============================================================================
// Breadth-first search from a start article to a target article.
//
// How it works:
// 1. Seed the frontier with the start node
// 2. Take the oldest pending nodes (all from the same BFS level)
// 3. Ask the edge oracle for their links, up to `concurrency` at a time
// 4. Append every never-seen neighbor to the frontier, remembering who
//    discovered it
// 5. Stop as soon as the target is discovered, then walk the discovery
//    links back to the start
//
// Why this gives a shortest path:
// - The frontier is FIFO and a level is only started once the previous one
//   is fully expanded, so nodes are discovered in order of distance
// - The first time the target is discovered is therefore at its minimum
//   depth
// - Results of a concurrent batch are applied in frontier order, so the
//   path found is the same one a one-at-a-time search would find
//
// A node that fails to fetch simply contributes no links.
//
// Rust concepts:
// - Generics with trait bounds: Searcher<O: EdgeOracle>
// - futures::StreamExt::buffered: run N futures, yield results in order
// - tokio::select!: race the work against cancellation and the deadline
// =============================================================================

use std::future;

use futures::stream::{self, StreamExt};
use tokio::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

use super::control::{Cancellation, ProgressEvent, ProgressHook};
use super::frontier::Frontier;
use super::{BudgetKind, Path, SearchConfig, SearchOutcome, SearchReport, SearchStats};
use crate::error::SearchError;
use crate::oracle::EdgeOracle;

/// Finds the shortest path from `start` to `target`.
///
/// Convenience wrapper around [`Searcher`] for callers that need neither
/// progress events nor cancellation.
pub async fn find_path<O: EdgeOracle>(
    oracle: &O,
    start: &str,
    target: &str,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    let report = Searcher::new(oracle, config.clone())
        .run(start, target)
        .await?;
    Ok(report.outcome)
}

/// A configured search over the graph revealed by an [`EdgeOracle`].
///
/// Holds no per-search state; `run` can be called repeatedly.
pub struct Searcher<O> {
    oracle: O,
    config: SearchConfig,
    progress: Option<ProgressHook>,
    cancellation: Option<Cancellation>,
}

impl<O: EdgeOracle> Searcher<O> {
    pub fn new(oracle: O, config: SearchConfig) -> Self {
        Self {
            oracle,
            config,
            progress: None,
            cancellation: None,
        }
    }

    /// Calls `hook` for every progress event.
    pub fn with_progress(
        mut self,
        hook: impl Fn(&ProgressEvent<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.progress = Some(Box::new(hook));
        self
    }

    pub fn with_cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = Some(cancellation);
        self
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Runs one search.
    ///
    /// Fails only if `start` or `target` is not an absolute http(s) URL, and
    /// that is checked before any page is fetched. Everything else,
    /// including "no path", is reported through the outcome.
    pub async fn run(&self, start: &str, target: &str) -> Result<SearchReport, SearchError> {
        validate_node("start", start)?;
        validate_node("target", target)?;

        let started = Instant::now();
        let mut stats = SearchStats::default();

        let outcome = if start == target {
            stats.discovered = 1;
            SearchOutcome::Found {
                path: Path::new(vec![start.to_string()]),
            }
        } else {
            self.breadth_first(start, target, &mut stats).await
        };

        stats.elapsed_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            SearchOutcome::Found { path } => info!(
                "Found a path of {} link(s) after expanding {} page(s)",
                path.hops(),
                stats.expanded
            ),
            SearchOutcome::NotFound => info!(
                "No path found: all {} reachable page(s) expanded",
                stats.expanded
            ),
            SearchOutcome::BudgetExceeded { budget } => info!(
                "Gave up after expanding {} page(s): {:?} budget exhausted",
                stats.expanded, budget
            ),
            SearchOutcome::Cancelled => info!("Search cancelled after {} page(s)", stats.expanded),
        }

        Ok(SearchReport { outcome, stats })
    }

    async fn breadth_first(
        &self,
        start: &str,
        target: &str,
        stats: &mut SearchStats,
    ) -> SearchOutcome {
        let budget = &self.config.budget;
        let concurrency = self.config.concurrency.max(1);
        let deadline = budget.time_limit.map(|limit| Instant::now() + limit);

        info!("Searching for {} starting from {}", target, start);

        let mut frontier = Frontier::new(start);
        let mut level = 0;

        let outcome = 'search: loop {
            if self.is_cancelled() {
                break SearchOutcome::Cancelled;
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                break SearchOutcome::BudgetExceeded {
                    budget: BudgetKind::Time,
                };
            }

            let depth = match frontier.peek_depth() {
                Some(depth) => depth,
                None => {
                    self.level_completed(level, 0, stats);
                    break SearchOutcome::NotFound;
                }
            };
            if depth > level {
                self.level_completed(level, frontier.pending(), stats);
                level = depth;
            }

            // Expanding a node at max_depth could only find longer paths
            if budget.max_depth.is_some_and(|max| depth >= max) {
                break SearchOutcome::BudgetExceeded {
                    budget: BudgetKind::Depth,
                };
            }

            let remaining = match budget.max_expansions {
                Some(max) => max.saturating_sub(stats.expanded),
                None => usize::MAX,
            };
            if remaining == 0 {
                break SearchOutcome::BudgetExceeded {
                    budget: BudgetKind::Expansions,
                };
            }

            let jobs: Vec<(usize, String)> = frontier
                .pop_level(concurrency.min(remaining))
                .into_iter()
                .map(|index| (index, frontier.node(index).to_string()))
                .collect();

            let oracle = &self.oracle;
            let expansions = stream::iter(jobs)
                .map(move |(index, node)| async move {
                    let result = oracle.expand(&node).await;
                    (index, node, result)
                })
                .buffered(concurrency)
                .collect::<Vec<_>>();

            let results = tokio::select! {
                results = expansions => Ok(results),
                _ = wait_for_cancel(self.cancellation.as_ref()) => Err(SearchOutcome::Cancelled),
                _ = wait_until(deadline) => Err(SearchOutcome::BudgetExceeded {
                    budget: BudgetKind::Time,
                }),
            };
            let results = match results {
                Ok(results) => results,
                Err(outcome) => break outcome,
            };

            stats.deepest_level = depth;

            // Every page in the batch was fetched, even if the target turns
            // up before the loop reaches it
            let batch_start = stats.expanded;
            stats.expanded += results.len();
            stats.failed += results.iter().filter(|(_, _, result)| result.is_err()).count();

            for (position, (index, node, result)) in results.into_iter().enumerate() {
                let expanded = batch_start + position + 1;

                let neighbors = match result {
                    Ok(neighbors) => neighbors,
                    Err(error) => {
                        warn!("Treating {} as a dead end: {}", node, error);
                        self.emit(&ProgressEvent::ExpandFailed {
                            node: &node,
                            depth,
                            error: &error,
                        });
                        continue;
                    }
                };

                // HashSet order is random; sort so runs are reproducible
                let mut neighbors: Vec<String> = neighbors.into_iter().collect();
                neighbors.sort_unstable();
                let total = neighbors.len();

                let mut new_nodes = 0;
                let mut found = None;
                for neighbor in neighbors {
                    let is_target = neighbor == target;
                    if let Some(child) = frontier.push(neighbor, index) {
                        new_nodes += 1;
                        if is_target {
                            found = Some(child);
                            break;
                        }
                    }
                }

                debug!(
                    "[depth {}] {} ({} expanded): {} links, {} new",
                    depth, node, expanded, total, new_nodes
                );
                self.emit(&ProgressEvent::Expanded {
                    node: &node,
                    depth: frontier.depth(index),
                    neighbors: total,
                    new_nodes,
                    expanded,
                });

                if let Some(child) = found {
                    break 'search SearchOutcome::Found {
                        path: Path::new(frontier.path_to(child)),
                    };
                }
            }
        };

        stats.discovered = frontier.discovered();
        outcome
    }

    fn level_completed(&self, depth: usize, pending: usize, stats: &SearchStats) {
        info!(
            "Level {} done: {} page(s) expanded so far, {} queued",
            depth, stats.expanded, pending
        );
        self.emit(&ProgressEvent::LevelCompleted { depth, pending });
    }

    fn emit(&self, event: &ProgressEvent<'_>) {
        if let Some(hook) = &self.progress {
            hook(event);
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(Cancellation::is_cancelled)
    }
}

// Checks that a node identifier is an absolute http(s) URL with a host
fn validate_node(role: &'static str, value: &str) -> Result<(), SearchError> {
    let invalid = |reason: String| SearchError::InvalidArgument {
        role,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}

async fn wait_for_cancel(cancellation: Option<&Cancellation>) {
    match cancellation {
        Some(cancellation) => cancellation.cancelled().await,
        None => future::pending().await,
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::search::Budget;
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet, VecDeque};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const BASE: &str = "https://en.wikipedia.org/wiki/";

    fn url(title: &str) -> String {
        format!("{}{}", BASE, title)
    }

    // In-memory graph that counts how often each node is expanded
    #[derive(Default)]
    struct MockOracle {
        edges: HashMap<String, Vec<String>>,
        failing: HashSet<String>,
        delay: Option<Duration>,
        calls: Mutex<HashMap<String, usize>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl MockOracle {
        fn new(edges: &[(&str, &[&str])]) -> Self {
            Self {
                edges: edges
                    .iter()
                    .map(|(from, to)| (url(from), to.iter().map(|t| url(t)).collect()))
                    .collect(),
                ..Default::default()
            }
        }

        fn failing(mut self, title: &str) -> Self {
            self.failing.insert(url(title));
            self
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn total_calls(&self) -> usize {
            self.calls.lock().unwrap().values().sum()
        }

        fn calls_for(&self, title: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .get(&url(title))
                .copied()
                .unwrap_or(0)
        }

        fn max_calls_per_node(&self) -> usize {
            self.calls.lock().unwrap().values().copied().max().unwrap_or(0)
        }
    }

    #[async_trait]
    impl EdgeOracle for MockOracle {
        async fn expand(&self, node: &str) -> Result<HashSet<String>, FetchError> {
            *self.calls.lock().unwrap().entry(node.to_string()).or_default() += 1;

            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.failing.contains(node) {
                return Err(FetchError::Status {
                    url: node.to_string(),
                    status: 500,
                });
            }
            Ok(self
                .edges
                .get(node)
                .map(|targets| targets.iter().cloned().collect())
                .unwrap_or_default())
        }
    }

    // A -> {B, C}, B -> {D}, C -> {D}, D -> {}
    fn diamond() -> MockOracle {
        MockOracle::new(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &["D"]), ("D", &[])])
    }

    fn titles(path: &Path) -> Vec<String> {
        path.nodes()
            .iter()
            .map(|node| node.trim_start_matches(BASE).to_string())
            .collect()
    }

    // Plain BFS over the mock adjacency, for comparing distances
    fn true_distance(oracle: &MockOracle, start: &str, target: &str) -> Option<usize> {
        let mut dist = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(url(start), 0);
        queue.push_back(url(start));
        while let Some(node) = queue.pop_front() {
            let d = dist[&node];
            if node == url(target) {
                return Some(d);
            }
            for next in oracle.edges.get(&node).into_iter().flatten() {
                if !dist.contains_key(next) {
                    dist.insert(next.clone(), d + 1);
                    queue.push_back(next.clone());
                }
            }
        }
        None
    }

    fn assert_valid_path(oracle: &MockOracle, path: &Path, start: &str, target: &str) {
        assert_eq!(path.start(), url(start));
        assert_eq!(path.target(), url(target));
        for pair in path.nodes().windows(2) {
            assert!(
                oracle.edges[&pair[0]].contains(&pair[1]),
                "{} does not link to {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[tokio::test]
    async fn test_start_equals_target_does_not_expand() {
        let oracle = diamond();
        let searcher = Searcher::new(&oracle, SearchConfig::default());

        let report = searcher.run(&url("A"), &url("A")).await.unwrap();

        let path = report.outcome.path().expect("path");
        assert_eq!(path.nodes(), &[url("A")]);
        assert_eq!(path.hops(), 0);
        assert_eq!(oracle.total_calls(), 0);
        assert_eq!(report.stats.expanded, 0);
    }

    #[tokio::test]
    async fn test_diamond_finds_two_hop_path() {
        let oracle = diamond();

        let outcome = find_path(&oracle, &url("A"), &url("D"), &SearchConfig::default())
            .await
            .unwrap();

        let path = outcome.path().expect("path");
        assert_eq!(path.hops(), 2);
        assert_valid_path(&oracle, path, "A", "D");
        // Neighbors are enqueued in sorted order, so B is tried before C
        assert_eq!(titles(path), vec!["A", "B", "D"]);
        // D is recognised on discovery, so neither C nor D is fetched
        assert_eq!(oracle.calls_for("C"), 0);
        assert_eq!(oracle.calls_for("D"), 0);
    }

    #[tokio::test]
    async fn test_prefers_shorter_path_over_earlier_longer_one() {
        // A -> B -> C -> D -> T, but also A -> E -> T
        let oracle = MockOracle::new(&[
            ("A", &["B", "E"]),
            ("B", &["C"]),
            ("C", &["D"]),
            ("D", &["T"]),
            ("E", &["T"]),
        ]);

        let outcome = find_path(&oracle, &url("A"), &url("T"), &SearchConfig::default())
            .await
            .unwrap();

        let path = outcome.path().expect("path");
        assert_eq!(titles(path), vec!["A", "E", "T"]);
    }

    #[tokio::test]
    async fn test_path_length_matches_true_distance() {
        let oracle = MockOracle::new(&[
            ("A", &["B", "C", "D"]),
            ("B", &["E", "A"]),
            ("C", &["E", "F"]),
            ("D", &["G"]),
            ("E", &["H", "B"]),
            ("F", &["H", "I"]),
            ("G", &["I", "J"]),
            ("H", &["K"]),
            ("I", &["K", "A"]),
            ("J", &["L"]),
            ("K", &["L"]),
            ("L", &[]),
        ]);

        for target in ["B", "E", "H", "I", "K", "L"] {
            let outcome = find_path(&oracle, &url("A"), &url(target), &SearchConfig::default())
                .await
                .unwrap();
            let path = outcome.path().expect("reachable");
            assert_eq!(
                Some(path.hops()),
                true_distance(&oracle, "A", target),
                "target {}",
                target
            );
            assert_valid_path(&oracle, path, "A", target);
        }
    }

    #[tokio::test]
    async fn test_each_node_expanded_at_most_once() {
        // Everything links to everything; Z is unreachable
        let oracle = MockOracle::new(&[
            ("A", &["B", "C", "D"]),
            ("B", &["A", "C", "D"]),
            ("C", &["A", "B", "D"]),
            ("D", &["A", "B", "C"]),
        ]);

        let outcome = find_path(&oracle, &url("A"), &url("Z"), &SearchConfig::default())
            .await
            .unwrap();

        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(oracle.max_calls_per_node(), 1);
        assert_eq!(oracle.total_calls(), 4);
    }

    #[tokio::test]
    async fn test_unreachable_target_expands_every_reachable_node() {
        // X and Y form a separate component
        let oracle = MockOracle::new(&[
            ("A", &["B", "C"]),
            ("B", &["D"]),
            ("C", &["D"]),
            ("D", &[]),
            ("X", &["Y"]),
            ("Y", &[]),
        ]);
        let searcher = Searcher::new(&oracle, SearchConfig::default());

        let report = searcher.run(&url("A"), &url("Y")).await.unwrap();

        assert_eq!(report.outcome, SearchOutcome::NotFound);
        assert_eq!(oracle.total_calls(), 4);
        assert_eq!(report.stats.expanded, 4);
        assert_eq!(report.stats.discovered, 4);
        assert_eq!(oracle.calls_for("X"), 0);
    }

    #[tokio::test]
    async fn test_expansion_budget_reports_budget_exceeded() {
        let oracle = diamond();
        let config = SearchConfig {
            budget: Budget {
                max_expansions: Some(1),
                ..Default::default()
            },
            ..Default::default()
        };

        let outcome = find_path(&oracle, &url("A"), &url("D"), &config)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::BudgetExceeded {
                budget: BudgetKind::Expansions
            }
        );
        assert_eq!(oracle.total_calls(), 1);
    }

    #[tokio::test]
    async fn test_depth_budget() {
        let oracle = diamond();
        let depth = |max_depth| SearchConfig {
            budget: Budget {
                max_depth: Some(max_depth),
                ..Default::default()
            },
            ..Default::default()
        };

        let outcome = find_path(&oracle, &url("A"), &url("D"), &depth(1))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::BudgetExceeded {
                budget: BudgetKind::Depth
            }
        );

        let outcome = find_path(&oracle, &url("A"), &url("D"), &depth(2))
            .await
            .unwrap();
        assert_eq!(outcome.path().map(Path::hops), Some(2));
    }

    #[tokio::test]
    async fn test_time_budget() {
        let oracle = MockOracle::new(&[("A", &["B"]), ("B", &["C"]), ("C", &["D"])])
            .with_delay(Duration::from_millis(200));
        let config = SearchConfig {
            budget: Budget {
                time_limit: Some(Duration::from_millis(50)),
                ..Default::default()
            },
            ..Default::default()
        };

        let outcome = find_path(&oracle, &url("A"), &url("D"), &config)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::BudgetExceeded {
                budget: BudgetKind::Time
            }
        );
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let oracle = diamond();
        let cancellation = Cancellation::new();
        cancellation.cancel();
        let searcher = Searcher::new(&oracle, SearchConfig::default()).with_cancellation(cancellation);

        let report = searcher.run(&url("A"), &url("D")).await.unwrap();

        assert_eq!(report.outcome, SearchOutcome::Cancelled);
        assert_eq!(oracle.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_mid_search() {
        let oracle = MockOracle::new(&[("A", &["B"]), ("B", &["C"]), ("C", &["D"])])
            .with_delay(Duration::from_millis(100));
        let cancellation = Cancellation::new();
        let searcher =
            Searcher::new(&oracle, SearchConfig::default()).with_cancellation(cancellation.clone());

        let canceller = async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            cancellation.cancel();
        };
        let (start, target) = (url("A"), url("D"));
        let (report, ()) = tokio::join!(searcher.run(&start, &target), canceller);

        assert_eq!(report.unwrap().outcome, SearchOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_a_dead_end_not_an_abort() {
        // B fails, but C still leads to D
        let oracle = MockOracle::new(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &["D"])])
            .failing("B");
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let searcher = Searcher::new(&oracle, SearchConfig::default()).with_progress(move |event| {
            if let ProgressEvent::ExpandFailed { node, .. } = event {
                sink.lock().unwrap().push(node.to_string());
            }
        });

        let report = searcher.run(&url("A"), &url("D")).await.unwrap();

        let path = report.outcome.path().expect("path through C");
        assert_eq!(titles(path), vec!["A", "C", "D"]);
        assert_eq!(report.stats.failed, 1);
        assert_eq!(*events.lock().unwrap(), vec![url("B")]);
    }

    #[tokio::test]
    async fn test_failing_start_is_not_found() {
        let oracle = diamond().failing("A");
        let outcome = find_path(&oracle, &url("A"), &url("D"), &SearchConfig::default())
            .await
            .unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_invalid_arguments_do_no_io() {
        let oracle = diamond();
        for (start, target) in [
            ("Dog", url("D")),
            (BASE, "ftp://en.wikipedia.org/wiki/D".to_string()),
            ("", url("D")),
        ] {
            let err = find_path(&oracle, start, &target, &SearchConfig::default())
                .await
                .unwrap_err();
            assert!(matches!(err, SearchError::InvalidArgument { .. }));
        }
        assert_eq!(oracle.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_expansion_matches_sequential_path() {
        // Level 1 is wide; only the last node leads on to the target
        let oracle = MockOracle::new(&[
            ("A", &["B1", "B2", "B3", "B4", "B5"]),
            ("B4", &["C"]),
            ("B5", &["T"]),
            ("C", &["T"]),
        ])
        .with_delay(Duration::from_millis(10));
        let config = SearchConfig {
            concurrency: 4,
            ..Default::default()
        };

        let outcome = find_path(&oracle, &url("A"), &url("T"), &config)
            .await
            .unwrap();

        assert_eq!(titles(outcome.path().expect("path")), vec!["A", "B5", "T"]);
        assert!(oracle.max_in_flight.load(Ordering::SeqCst) > 1);
        assert!(oracle.max_in_flight.load(Ordering::SeqCst) <= 4);
        assert_eq!(oracle.max_calls_per_node(), 1);
    }

    #[tokio::test]
    async fn test_stats_count_whole_batch_when_target_found_early() {
        // B1..B4 are fetched together; B2 finds T before B3 and B4 are applied
        let oracle = MockOracle::new(&[
            ("A", &["B1", "B2", "B3", "B4"]),
            ("B2", &["T"]),
            ("B3", &["X"]),
        ])
        .failing("B4");
        let config = SearchConfig {
            concurrency: 4,
            ..Default::default()
        };

        let report = Searcher::new(&oracle, config)
            .run(&url("A"), &url("T"))
            .await
            .unwrap();

        assert_eq!(titles(report.outcome.path().expect("path")), vec!["A", "B2", "T"]);
        assert_eq!(oracle.total_calls(), 5);
        assert_eq!(report.stats.expanded, 5);
        assert_eq!(report.stats.failed, 1);
    }

    #[tokio::test]
    async fn test_concurrency_never_mixes_levels() {
        // With room for 10 in flight, A's two children must still be
        // expanded on their own before any grandchild
        let oracle = MockOracle::new(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &["E"])]);
        let order = Arc::new(Mutex::new(Vec::new()));
        let sink = order.clone();
        let config = SearchConfig {
            concurrency: 10,
            ..Default::default()
        };
        let searcher = Searcher::new(&oracle, config).with_progress(move |event| {
            if let ProgressEvent::Expanded { depth, .. } = event {
                sink.lock().unwrap().push(*depth);
            }
        });

        let report = searcher.run(&url("A"), &url("Z")).await.unwrap();

        assert_eq!(report.outcome, SearchOutcome::NotFound);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 1, 2, 2]);
        assert_eq!(report.stats.deepest_level, 2);
    }

    #[tokio::test]
    async fn test_level_completed_events() {
        let oracle = diamond();
        let levels = Arc::new(Mutex::new(Vec::new()));
        let sink = levels.clone();
        let searcher = Searcher::new(&oracle, SearchConfig::default()).with_progress(move |event| {
            if let ProgressEvent::LevelCompleted { depth, pending } = event {
                sink.lock().unwrap().push((*depth, *pending));
            }
        });

        searcher.run(&url("A"), &url("Z")).await.unwrap();

        // A done with B, C queued; B, C done with D queued; D done, nothing left
        assert_eq!(*levels.lock().unwrap(), vec![(0, 2), (1, 1), (2, 0)]);
    }
}
