//! mdpress: a markdown blog content pipeline
//!
//! This crate scans markdown posts under a source directory, extracts
//! frontmatter, and builds a date-sorted post index suitable for a
//! blog listing page.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::{anyhow, Result};
use std::path::Path;

use content::{ContentScanner, ContentSource, PostIndexBuilder, PostSummary};

/// The main site handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
    /// Output directory
    pub out_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.src_dir);
        let out_dir = base_dir.join(&config.out_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            out_dir,
        })
    }

    /// Content scanner for the configured source directory
    pub fn scanner(&self) -> ContentScanner {
        ContentScanner::new(
            &self.source_dir,
            &self.config.posts_glob,
            self.config.clean_urls,
            self.config.excerpt,
        )
    }

    /// Scan posts and build the sorted index
    pub fn build_index(&self) -> Result<Vec<PostSummary>> {
        let locale = helpers::date::resolve_locale(&self.config.locale)
            .ok_or_else(|| anyhow!("unknown locale: {}", self.config.locale))?;

        let entries = self.scanner().entries()?;
        let posts = PostIndexBuilder::new(locale).build_index(&entries)?;
        Ok(posts)
    }
}
