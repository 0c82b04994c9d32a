//! List the post index on stdout

use anyhow::Result;

use crate::Site;

/// Print the sorted post index
pub fn run(site: &Site) -> Result<()> {
    let posts = site.build_index()?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!("  {} - {} [{}]", post.date.string, post.title, post.url);
    }

    Ok(())
}
