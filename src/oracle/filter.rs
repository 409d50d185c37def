// src/oracle/filter.rs
// =============================================================================
// Decides which extracted links count as edges of the article graph, and
// gives every accepted link a single canonical identifier.
//
// Two stages, both must pass:
// 1. Article-likeness: the link is an http(s) URL on a Wikipedia host, its
//    path is under /wiki/, and the title after /wiki/ carries no namespace
//    separator (':'). That drops Special:, File:, Category:, Help: ... pages.
// 2. Scope: the host is exactly the edition we are searching in, so a search
//    on en.wikipedia.org never wanders into fr.wikipedia.org.
//
// Canonical form: https, the scoped host, and the title decoded then
// re-encoded the way MediaWiki encodes it (spaces as '_', "C++" as
// "C%2B%2B"). http/https variants and differently-escaped spellings of one
// title all become the same node.
// =============================================================================

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

pub const DEFAULT_HOST: &str = "en.wikipedia.org";
pub const DEFAULT_FAMILY_DOMAIN: &str = "wikipedia.org";
pub const DEFAULT_ARTICLE_PREFIX: &str = "/wiki/";

// Characters MediaWiki leaves unescaped in article paths
const TITLE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b';')
    .remove(b'@')
    .remove(b'$')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b',')
    .remove(b'/')
    .remove(b':');

/// Accepts links to articles of a single Wikipedia edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilter {
    host: String,
    family_domain: String,
    article_prefix: String,
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl ArticleFilter {
    /// A filter scoped to `host`, e.g. "de.wikipedia.org".
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            family_domain: DEFAULT_FAMILY_DOMAIN.to_string(),
            article_prefix: DEFAULT_ARTICLE_PREFIX.to_string(),
        }
    }

    /// A filter scoped to the edition `start` lives on.
    ///
    /// Returns None if `start` has no host.
    pub fn for_url(start: &Url) -> Option<Self> {
        start.host_str().map(Self::new)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Both stages: is this link an edge we follow?
    pub fn accepts(&self, link: &str) -> bool {
        self.canonicalize(link).is_some()
    }

    /// Both stages, returning the canonical identifier of an accepted link.
    pub fn canonicalize(&self, link: &str) -> Option<String> {
        let url = Url::parse(link).ok()?;
        let title = self.article_title(&url)?;
        if !self.in_scope(&url) {
            return None;
        }
        Some(self.canonical_url(&title))
    }

    /// Stage 1: does the link look like an article on any Wikipedia host?
    pub fn is_article(&self, url: &Url) -> bool {
        self.article_title(url).is_some()
    }

    /// Stage 2: is the link on the exact edition we are confined to?
    pub fn in_scope(&self, url: &Url) -> bool {
        url.host_str() == Some(self.host.as_str())
    }

    /// Canonical identifier for a plain title on this edition.
    pub fn canonical_url(&self, title: &str) -> String {
        let title = title.replace(' ', "_");
        format!(
            "https://{}{}{}",
            self.host,
            self.article_prefix,
            utf8_percent_encode(&title, TITLE_ENCODE_SET)
        )
    }

    // The decoded article title, if the URL passes stage 1
    fn article_title(&self, url: &Url) -> Option<String> {
        if url.scheme() != "http" && url.scheme() != "https" {
            return None;
        }

        let host = url.host_str()?;
        let on_family_host = host == self.family_domain
            || host
                .strip_suffix(self.family_domain.as_str())
                .is_some_and(|sub| sub.ends_with('.'));
        if !on_family_host {
            return None;
        }

        // /w/index.php?title=...&action=edit and friends
        if url.query().is_some() {
            return None;
        }

        let raw = url.path().strip_prefix(self.article_prefix.as_str())?;
        let title = percent_decode_str(raw).decode_utf8_lossy();

        // A ':' anywhere in the title marks a non-article namespace
        if title.is_empty() || title.contains(':') {
            return None;
        }
        Some(title.into_owned())
    }
}

/// Turns user input into a canonical article identifier.
///
/// Full URLs lose their fragment, and article URLs on a Wikipedia host are
/// put in the same canonical form the filter gives extracted links. Anything
/// else is taken as a title on `host`.
pub fn article_url(input: &str, host: &str) -> Result<String, url::ParseError> {
    let input = input.trim();
    if input.starts_with("http://") || input.starts_with("https://") {
        let mut url = Url::parse(input)?;
        url.set_fragment(None);

        let canonical =
            ArticleFilter::for_url(&url).and_then(|filter| filter.canonicalize(url.as_str()));
        return Ok(canonical.unwrap_or_else(|| url.into()));
    }

    let canonical = ArticleFilter::new(host).canonical_url(input);
    // Validates the host part as well
    Url::parse(&canonical)?;
    Ok(canonical)
}
