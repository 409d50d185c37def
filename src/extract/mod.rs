// src/extract/mod.rs
// =============================================================================
// This module pulls outgoing links out of fetched pages.
//
// Submodules:
// - pattern: best-effort regex scan for href="..." (the default)
// - html: full DOM parse with scraper, selecting a[href]
//
// Both return absolute URLs with the fragment removed, so
// "/wiki/Dog#History" on an en.wikipedia.org page becomes
// "https://en.wikipedia.org/wiki/Dog". Deciding which of those links are
// articles is NOT done here; that is the edge oracle's filter.
// =============================================================================

mod html;
mod pattern;

pub use html::HtmlExtractor;
pub use pattern::PatternExtractor;

use std::collections::HashSet;

use url::Url;

use crate::dump::DumpDir;

/// Something that finds the hyperlink targets embedded in a page.
pub trait LinkExtractor: Send + Sync {
    /// Returns every link target found in `content`, resolved against `base`
    /// (the URL the content was fetched from).
    fn extract_links(&self, content: &str, base: &Url) -> HashSet<String>;
}

/// Wraps another extractor and writes each extracted set to a dump directory.
#[derive(Debug, Clone)]
pub struct DumpingExtractor<X> {
    inner: X,
    dump: DumpDir,
}

impl<X> DumpingExtractor<X> {
    pub fn new(inner: X, dump: DumpDir) -> Self {
        Self { inner, dump }
    }
}

impl<X: LinkExtractor> LinkExtractor for DumpingExtractor<X> {
    fn extract_links(&self, content: &str, base: &Url) -> HashSet<String> {
        let links = self.inner.extract_links(content, base);
        self.dump.write_links(base.as_str(), &links);
        links
    }
}

impl LinkExtractor for Box<dyn LinkExtractor> {
    fn extract_links(&self, content: &str, base: &Url) -> HashSet<String> {
        self.as_ref().extract_links(content, base)
    }
}

// Resolves a raw href against the page URL
//
// Returns None for in-page anchors, non-HTTP schemes and anything that
// does not form a valid URL. The fragment is always dropped.
fn resolve_href(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    let mut url = base.join(href).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }
    url.set_fragment(None);
    Some(url.to_string())
}
