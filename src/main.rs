// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (to stderr, so --json output stays clean)
// 3. Build the fetcher -> extractor -> oracle stack
// 4. Run the search, cancelling it on Ctrl-C
// 5. Print the result and exit with a proper code
//    (0 = path found, 1 = no path / gave up, 2 = error)
// =============================================================================

mod cli;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, ParserKind};
use wiki_race::dump::DumpDir;
use wiki_race::extract::{DumpingExtractor, HtmlExtractor, LinkExtractor, PatternExtractor};
use wiki_race::fetch::{HttpFetcher, HttpFetcherConfig};
use wiki_race::{
    article_url, ArticleFilter, Budget, Cancellation, SearchConfig, SearchOutcome, SearchReport,
    Searcher, WikiOracle,
};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let default_host = format!("{}.wikipedia.org", cli.lang);
    let start = article_url(&cli.start, &default_host)
        .with_context(|| format!("Invalid start article '{}'", cli.start))?;
    let target = article_url(&cli.target, &default_host)
        .with_context(|| format!("Invalid target article '{}'", cli.target))?;

    let start_url = url::Url::parse(&start)?;
    let filter = ArticleFilter::for_url(&start_url)
        .with_context(|| format!("Start article '{}' has no host", start))?;
    if !filter.accepts(&target) {
        warn!(
            "Target {} is not an article on {}; it can never be reached",
            target,
            filter.host()
        );
    }

    let dump = match &cli.dump_dir {
        Some(dir) => Some(
            DumpDir::create(dir)
                .with_context(|| format!("Cannot create dump directory {}", dir.display()))?,
        ),
        None => None,
    };

    let mut fetcher = HttpFetcher::new(HttpFetcherConfig {
        timeout: Duration::from_secs(cli.request_timeout_secs),
        dump: dump.clone(),
        ..Default::default()
    })
    .context("Failed to create HTTP client")?;
    if let Some(mirror) = cli.mirror.clone() {
        info!("Fetching pages from mirror {}", mirror);
        fetcher = fetcher.with_mirror(mirror);
    }

    let extractor = build_extractor(cli.parser, dump);
    let oracle = WikiOracle::new(fetcher, extractor, filter);

    let config = SearchConfig {
        budget: Budget {
            max_depth: Some(cli.max_depth),
            max_expansions: cli.max_nodes,
            time_limit: cli.timeout_secs.map(Duration::from_secs),
        },
        concurrency: cli.concurrency,
    };

    // Ctrl-C stops the search cleanly instead of killing the process
    let cancellation = Cancellation::new();
    let on_interrupt = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("Interrupted, stopping search...");
            on_interrupt.cancel();
        }
    });

    if !cli.json {
        println!("🔍 Searching for a path");
        println!("   from {}", start);
        println!("   to   {}", target);
    }

    let searcher = Searcher::new(oracle, config).with_cancellation(cancellation);
    let report = searcher.run(&start, &target).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(match report.outcome {
        SearchOutcome::Found { .. } => 0,
        _ => 1,
    })
}

// RUST_LOG wins if set; otherwise info, or debug with -v
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wiki_race={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_extractor(kind: ParserKind, dump: Option<DumpDir>) -> Box<dyn LinkExtractor> {
    let extractor: Box<dyn LinkExtractor> = match kind {
        ParserKind::Regex => Box::new(PatternExtractor::default()),
        ParserKind::Html => Box::new(HtmlExtractor::default()),
    };

    match dump {
        Some(dump) => Box::new(DumpingExtractor::new(extractor, dump)),
        None => extractor,
    }
}

fn print_report(report: &SearchReport) {
    println!();
    match &report.outcome {
        SearchOutcome::Found { path } => {
            println!("✅ Found a path of {} link(s):", path.hops());
            for (step, node) in path.nodes().iter().enumerate() {
                println!("   {:>2}. {}", step, node);
            }
        }
        SearchOutcome::NotFound => {
            println!("❌ No path found: every reachable article was visited");
        }
        SearchOutcome::BudgetExceeded { budget } => {
            println!(
                "⏱️  Gave up: {:?} limit reached before finding the target",
                budget
            );
        }
        SearchOutcome::Cancelled => {
            println!("🛑 Search cancelled");
        }
    }

    let stats = &report.stats;
    println!();
    println!("📊 Summary:");
    println!("   📄 Pages fetched: {}", stats.expanded);
    println!("   ⚠️  Failed fetches: {}", stats.failed);
    println!("   🔗 Articles discovered: {}", stats.discovered);
    println!("   📏 Deepest level: {}", stats.deepest_level);
    println!("   ⏲️  Time: {:.1}s", stats.elapsed_ms as f64 / 1000.0);
}
