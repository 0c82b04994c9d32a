//! Build the post index and write it as JSON

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Site;

/// Build the index and write it to the output file
///
/// The default target is `<out_dir>/posts.json`, the data file a listing
/// page consumes.
pub fn run(site: &Site, output: Option<&Path>) -> Result<()> {
    let posts = site.build_index()?;

    let target: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => site.out_dir.join("posts.json"),
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&posts)?;
    fs::write(&target, json)?;

    tracing::info!("Wrote {} posts to {:?}", posts.len(), target);
    Ok(())
}
