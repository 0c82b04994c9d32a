//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // URL
    pub clean_urls: bool,

    // Directory
    pub src_dir: String,
    pub out_dir: String,

    // Content
    /// Glob pattern for post files, relative to src_dir
    pub posts_glob: String,
    /// Extract an excerpt from each post when the source carries a marker
    pub excerpt: bool,
    /// Fixed locale for date rendering; output must not depend on the
    /// host environment
    pub locale: String,

    // Writing
    pub new_post_name: String,

    // Theme
    #[serde(default)]
    pub theme_config: ThemeConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),

            clean_urls: false,

            src_dir: "source".to_string(),
            out_dir: "public".to_string(),

            posts_glob: "post/*.md".to_string(),
            excerpt: true,
            locale: "en-US".to_string(),

            new_post_name: ":title.md".to_string(),

            theme_config: ThemeConfig::default(),
            extra: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Theme configuration: navigation and sidebar structure.
///
/// Pure data consumed by the theme layer; carries no behavior of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<SidebarGroup>,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// A single navigation entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

/// A sidebar group with its entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarGroup {
    pub text: String,
    pub items: Vec<NavItem>,
}
