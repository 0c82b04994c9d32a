//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Site;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("source/post"))?;

    let config_content = r#"# Site
title: My Blog
description: ''

# URL
clean_urls: false

# Directory
src_dir: source
out_dir: public

# Content
posts_glob: post/*.md
excerpt: true
locale: en-US

# Writing
new_post_name: :title.md

# Theme
theme_config:
  nav:
    - text: Home
      link: /
    - text: About
      link: /about
  sidebar:
    - text: Posts
      items:
        - text: Hello World
          link: /post/hello-world
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    // Create a sample post
    let now = chrono::Utc::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
tags:
---

Welcome to your new blog. This is your very first post, and the part
above the marker below becomes its excerpt on the listing page.

<!-- more -->

## Quick Start

### Create a new post

```bash
$ mdpress new "My New Post"
```

### Build the post index

```bash
$ mdpress index
```
"#,
        now.format("%Y-%m-%d")
    );

    fs::write(target_dir.join("source/post/hello-world.md"), sample_post)?;

    Ok(())
}

/// Run the init command with an existing Site instance
pub fn run(site: &Site) -> Result<()> {
    init_site(&site.base_dir)
}
