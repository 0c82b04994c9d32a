//! Content discovery - scans markdown posts under the source directory

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{FrontMatter, MarkdownRenderer};
use crate::helpers::url::page_url;

/// One discovered content file, before index building
#[derive(Debug, Clone)]
pub struct RawContentEntry {
    /// Normalized site-relative path of the rendered page
    pub url: String,
    /// Parsed frontmatter mapping
    pub frontmatter: FrontMatter,
    /// Rendered excerpt HTML, present only when the source carries an
    /// excerpt marker
    pub excerpt: Option<String>,
}

/// A source of raw content entries.
///
/// The index builder depends only on this capability, so it can be driven
/// from in-memory fixtures in tests instead of a real source tree.
pub trait ContentSource {
    fn entries(&self) -> Result<Vec<RawContentEntry>>;
}

/// Scans files matched by a glob pattern under a source directory
pub struct ContentScanner {
    source_dir: PathBuf,
    pattern: String,
    clean_urls: bool,
    excerpt: bool,
    renderer: MarkdownRenderer,
}

impl ContentScanner {
    /// Create a new scanner
    pub fn new<P: AsRef<Path>>(source_dir: P, pattern: &str, clean_urls: bool, excerpt: bool) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            pattern: pattern.to_string(),
            clean_urls,
            excerpt,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load a single entry from a file
    fn load_entry(&self, path: &Path) -> Result<RawContentEntry> {
        let content = fs::read_to_string(path)?;
        let (frontmatter, body) = FrontMatter::parse(&content);

        // Source path relative to the source dir drives the page URL
        let source = path
            .strip_prefix(&self.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        let url = page_url(&source, self.clean_urls);

        let excerpt = if self.excerpt {
            let (excerpt_md, _) = MarkdownRenderer::split_excerpt(body);
            excerpt_md.map(|e| self.renderer.render(&e))
        } else {
            None
        };

        Ok(RawContentEntry {
            url,
            frontmatter,
            excerpt,
        })
    }
}

impl ContentSource for ContentScanner {
    fn entries(&self) -> Result<Vec<RawContentEntry>> {
        let pattern = self.source_dir.join(&self.pattern);
        let pattern = pattern.to_string_lossy();

        let mut paths = glob::glob(&pattern)
            .with_context(|| format!("invalid posts glob: {}", self.pattern))?
            .collect::<Result<Vec<PathBuf>, _>>()?;
        // Reproducible scan order regardless of filesystem enumeration
        paths.sort();

        let mut entries = Vec::with_capacity(paths.len());
        for path in &paths {
            tracing::debug!("Loading content file {:?}", path);
            let entry = self
                .load_entry(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            entries.push(entry);
        }

        tracing::info!("Discovered {} content files", entries.len());
        Ok(entries)
    }
}
