// src/error.rs
// =============================================================================
// Error types for the library.
//
// Two families of failure exist and they are handled very differently:
// - FetchError: one article could not be retrieved. The search recovers by
//   treating that article as having no links and keeps going.
// - SearchError: the caller handed us something we cannot search from at all
//   (e.g. a start "URL" that is not a URL). Reported before any network I/O.
//
// "No path found" and "budget exceeded" are NOT errors. They are normal
// outcomes and live in search::SearchOutcome.
//
// Rust concepts:
// - thiserror: derive macro that writes the Display/Error impls for us
// - #[from]: lets the ? operator convert one error type into another
// =============================================================================

use thiserror::Error;

/// Why a single page could not be fetched.
///
/// Categorized the same way the status checker in reqwest-based tools usually
/// does it, so log lines say "timed out" rather than a raw hyper error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not connect to {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("too many redirects while fetching {url}")]
    TooManyRedirects { url: String },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("cannot fetch {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    /// The URL the failed request was for.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Timeout { url }
            | FetchError::Status { url, .. }
            | FetchError::Connect { url, .. }
            | FetchError::TooManyRedirects { url }
            | FetchError::Transport { url, .. }
            | FetchError::InvalidUrl { url, .. } => url,
        }
    }
}

/// Errors that stop a search before it starts.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid {role} article '{value}': {reason}")]
    InvalidArgument {
        role: &'static str,
        value: String,
        reason: String,
    },
}
