// src/dump.rs
// =============================================================================
// Optional debug dumps of fetched pages and extracted link sets.
//
// When a dump directory is configured, every fetched page is written as
// "<url>\n<html>" to <name>.html and every extracted link set is written
// newline-joined to <name>.links. Nothing here affects the search: a failed
// write is logged and ignored.
// =============================================================================

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

// Longest article-title prefix kept in a dump file name
const MAX_NAME_LEN: usize = 80;
// Hex digits of the URL hash kept in a dump file name
const HASH_LEN: usize = 16;

/// A directory that receives debug dumps.
#[derive(Debug, Clone)]
pub struct DumpDir {
    dir: PathBuf,
}

impl DumpDir {
    /// Creates the directory (and parents) if it does not exist yet.
    pub fn create(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Writes `url + "\n" + content` for a fetched page.
    pub fn write_page(&self, url: &str, content: &str) {
        let path = self.dir.join(file_name_for(url, "html"));
        let contents = format!("{}\n{}", url, content);
        self.write(&path, &contents);
    }

    /// Writes the newline-joined set of links extracted from `url`.
    pub fn write_links(&self, url: &str, links: &HashSet<String>) {
        let path = self.dir.join(file_name_for(url, "links"));
        // Sorted so two dumps of the same page diff cleanly
        let mut sorted: Vec<&str> = links.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        self.write(&path, &sorted.join("\n"));
    }

    fn write(&self, path: &Path, contents: &str) {
        match fs::write(path, contents) {
            Ok(()) => debug!("Wrote debug dump {}", path.display()),
            Err(e) => warn!("Failed to write debug dump {}: {}", path.display(), e),
        }
    }
}

// Builds a file name from the last path segment of the URL plus a hash of the
// whole URL, so "C++" and "C" do not overwrite each other. The hash is blake3,
// so the same page lands in the same file across runs and builds.
fn file_name_for(url: &str, extension: &str) -> String {
    let last_segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    let mut name: String = last_segment
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_NAME_LEN)
        .collect();
    if name.is_empty() {
        name.push_str("page");
    }

    let hash = blake3::hash(url.as_bytes()).to_hex();

    format!("{}-{}.{}", name, &hash.as_str()[..HASH_LEN], extension)
}
