//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Site;

/// Create a new post under the posts directory
pub fn create_post(site: &Site, title: &str) -> Result<()> {
    let now = chrono::Utc::now();

    let target_dir = site.source_dir.join(posts_dir(&site.config.posts_glob));
    fs::create_dir_all(&target_dir)?;

    let slug = slug::slugify(title);
    let filename = site
        .config
        .new_post_name
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string());

    let file_path = target_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\ntags:\n---\n",
        title,
        now.format("%Y-%m-%d")
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);
    Ok(())
}

/// Directory component of the posts glob, up to the first wildcard
fn posts_dir(pattern: &str) -> &Path {
    let dir = Path::new(pattern).parent().unwrap_or(Path::new(""));
    if dir.to_string_lossy().contains(&['*', '?', '['][..]) {
        Path::new("post")
    } else {
        dir
    }
}
