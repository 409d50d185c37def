// src/extract/pattern.rs
// =============================================================================
// Regex-based link extraction.
//
// This does NOT parse the HTML. It scans the raw text for href="..." (or
// href='...') and takes whatever sits between the quotes. That is fast and
// good enough for Wikipedia's markup, but it can over- or under-match on
// unusual pages (an href inside a <script> string, an unquoted attribute).
// Use HtmlExtractor when that matters.
// =============================================================================

use std::collections::HashSet;

use regex::Regex;
use url::Url;

use super::{resolve_href, LinkExtractor};

/// Matches the value of a quoted href attribute
pub const HREF_PATTERN: &str = r#"(?i)\bhref\s*=\s*["']([^"']+)["']"#;

/// Scans raw page text for href attributes.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    pattern: Regex,
}

impl PatternExtractor {
    /// Uses a custom pattern. The first capture group must be the link target.
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        // HREF_PATTERN is a constant known to compile
        Self::with_pattern(HREF_PATTERN).expect("HREF_PATTERN is a valid regex")
    }
}

impl LinkExtractor for PatternExtractor {
    fn extract_links(&self, content: &str, base: &Url) -> HashSet<String> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            // Raw markup escapes '&' in query strings
            .map(|m| m.as_str().replace("&amp;", "&"))
            .filter_map(|href| resolve_href(base, &href))
            .collect()
    }
}
