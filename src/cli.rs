// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "wiki-race",
    version,
    about = "Find the shortest chain of Wikipedia links between two articles",
    long_about = "wiki-race runs a breadth-first search over Wikipedia, fetching each article \
                  to discover its links, until it reaches the target article. \
                  Articles can be given as full URLs or as titles."
)]
pub struct Cli {
    /// Article to start from (URL or title, e.g. "Python (programming language)")
    pub start: String,

    /// Article to reach (URL or title)
    pub target: String,

    /// Language edition used when articles are given as titles
    ///
    /// The search never leaves the edition of the start article
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Longest path (in links) to look for
    #[arg(long, default_value_t = 6)]
    pub max_depth: usize,

    /// Stop after fetching this many pages
    #[arg(long)]
    pub max_nodes: Option<usize>,

    /// Give up after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Pages of the same BFS level to fetch at once
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// How links are pulled out of pages
    #[arg(long, value_enum, default_value_t = ParserKind::Regex)]
    pub parser: ParserKind,

    /// Fetch pages from this origin instead of Wikipedia (e.g. a local mirror)
    #[arg(long)]
    pub mirror: Option<Url>,

    /// Write every fetched page and extracted link set to this directory
    #[arg(long)]
    pub dump_dir: Option<PathBuf>,

    /// Output the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Log each expanded page (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParserKind {
    /// Regex scan for href="..." (fast, best effort)
    Regex,
    /// Full HTML parse, <a href> only
    Html,
}
