// src/extract/html.rs
// =============================================================================
// This module extracts links by actually parsing the HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Slower than the regex scan, but it only sees real <a href> attributes
// and decodes entities for us.
//
// Rust concepts:
// - Iterators: For processing collections
// - Closures: Anonymous functions (|x| ...)
// =============================================================================

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use super::{resolve_href, LinkExtractor};

/// Extracts links from `<a href>` elements of a parsed document.
#[derive(Debug, Clone)]
pub struct HtmlExtractor {
    selector: Selector,
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        // "a[href]" is a constant and known to be valid
        let selector = Selector::parse("a[href]").expect("a[href] is a valid selector");
        Self { selector }
    }
}

impl LinkExtractor for HtmlExtractor {
    fn extract_links(&self, content: &str, base: &Url) -> HashSet<String> {
        if content.is_empty() {
            return HashSet::new();
        }

        let document = Html::parse_document(content);

        document
            .select(&self.selector)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| resolve_href(base, href))
            .collect()
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why store the Selector in the struct?
//    - Selector::parse is not free, and extract_links runs once per page
//    - Parsing it once in Default and reusing it avoids repeating the work
//
// 2. Why is Html not stored?
//    - scraper's Html is not Send, so it must not be held across an .await
//    - It is built and dropped inside this synchronous function
// -----------------------------------------------------------------------------
