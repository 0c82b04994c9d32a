//! URL helper functions

/// Map a source-relative markdown path to a normalized site path
///
/// # Examples
/// ```ignore
/// page_url("post/hello.md", false) // -> "/post/hello.html"
/// page_url("post/hello.md", true)  // -> "/post/hello"
/// ```
pub fn page_url(source: &str, clean_urls: bool) -> String {
    let source = source.replace('\\', "/");
    let stem = source
        .trim_start_matches('/')
        .trim_end_matches(".md")
        .trim_end_matches(".markdown");

    // index.md maps to its directory path
    if stem == "index" {
        return "/".to_string();
    }
    if let Some(dir) = stem.strip_suffix("/index") {
        return format!("/{}/", dir);
    }

    if clean_urls {
        format!("/{}", stem)
    } else {
        format!("/{}.html", stem)
    }
}
