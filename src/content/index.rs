//! Post index builder - turns discovered content into a sorted listing
//!
//! This is a pure transform: every entry is validated, its date is pinned
//! to noon UTC, and the result is sorted newest-first. The first invalid
//! entry fails the whole pass, a partial listing with silently dropped
//! posts is worse than a build failure.

use chrono::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::RawContentEntry;
use crate::helpers::date::{long_date, noon_utc, parse_date_string};

/// Normalized post date: a sortable timestamp plus a fixed-locale rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDate {
    /// Milliseconds since the Unix epoch
    pub time: i64,
    /// Long-form rendering, like "January 5, 2024"
    pub string: String,
}

/// One row of the listing-page index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub date: PostDate,
}

/// Per-entry validation failures
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("{url}: frontmatter date {date:?} is not a valid calendar date")]
    MalformedFrontmatter { url: String, date: Option<String> },

    #[error("{url}: frontmatter has no title")]
    MissingTitle { url: String },
}

/// Builds the sorted post index
pub struct PostIndexBuilder {
    locale: Locale,
}

impl PostIndexBuilder {
    /// Create a builder with a fixed formatting locale
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Transform raw entries into summaries sorted by date descending
    pub fn build_index(&self, entries: &[RawContentEntry]) -> Result<Vec<PostSummary>, IndexError> {
        let mut posts = Vec::with_capacity(entries.len());
        for entry in entries {
            posts.push(self.summarize(entry)?);
        }

        // Newest first; tie order is unspecified
        posts.sort_by(|a, b| b.date.time.cmp(&a.date.time));

        Ok(posts)
    }

    fn summarize(&self, entry: &RawContentEntry) -> Result<PostSummary, IndexError> {
        let title = entry
            .frontmatter
            .title
            .clone()
            .ok_or_else(|| IndexError::MissingTitle {
                url: entry.url.clone(),
            })?;

        let parsed = entry
            .frontmatter
            .date
            .as_deref()
            .and_then(parse_date_string)
            .ok_or_else(|| IndexError::MalformedFrontmatter {
                url: entry.url.clone(),
                date: entry.frontmatter.date.clone(),
            })?;
        let date = noon_utc(parsed);

        Ok(PostSummary {
            title,
            url: entry.url.clone(),
            excerpt: entry.excerpt.clone(),
            date: PostDate {
                time: date.timestamp_millis(),
                string: long_date(&date, self.locale),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use crate::helpers::date::resolve_locale;

    fn entry(url: &str, title: Option<&str>, date: Option<&str>, excerpt: Option<&str>) -> RawContentEntry {
        RawContentEntry {
            url: url.to_string(),
            frontmatter: FrontMatter {
                title: title.map(String::from),
                date: date.map(String::from),
                ..Default::default()
            },
            excerpt: excerpt.map(String::from),
        }
    }

    fn builder() -> PostIndexBuilder {
        PostIndexBuilder::new(resolve_locale("en-US").unwrap())
    }

    #[test]
    fn test_sorted_newest_first() {
        let entries = vec![
            entry("/a", Some("A"), Some("2024-01-05"), None),
            entry("/b", Some("B"), Some("2024-03-01"), Some("hi")),
        ];

        let posts = builder().build_index(&entries).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "B");
        assert_eq!(posts[0].date.string, "March 1, 2024");
        assert_eq!(posts[0].excerpt.as_deref(), Some("hi"));
        assert_eq!(posts[1].title, "A");
        assert_eq!(posts[1].date.string, "January 5, 2024");
        assert_eq!(posts[1].excerpt, None);
    }

    #[test]
    fn test_adjacent_pairs_descending() {
        let entries = vec![
            entry("/a", Some("A"), Some("2023-12-31"), None),
            entry("/b", Some("B"), Some("2024-06-15"), None),
            entry("/c", Some("C"), Some("2024-01-01"), None),
            entry("/d", Some("D"), Some("2022-02-02"), None),
        ];

        let posts = builder().build_index(&entries).unwrap();
        assert_eq!(posts.len(), entries.len());
        for pair in posts.windows(2) {
            assert!(pair[0].date.time >= pair[1].date.time);
        }
    }

    #[test]
    fn test_idempotent() {
        let entries = vec![
            entry("/a", Some("A"), Some("2024-01-05"), None),
            entry("/b", Some("B"), Some("2024-03-01"), None),
        ];

        let b = builder();
        let first = b.build_index(&entries).unwrap();
        let second = b.build_index(&entries).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_noon_utc_timestamp() {
        let entries = vec![entry("/a", Some("A"), Some("2024-01-05"), None)];
        let posts = builder().build_index(&entries).unwrap();
        // 2024-01-05T12:00:00Z
        assert_eq!(posts[0].date.time, 1_704_456_000_000);
    }

    #[test]
    fn test_malformed_date() {
        let entries = vec![entry("/bad", Some("Bad"), Some("not-a-date"), None)];
        let err = builder().build_index(&entries).unwrap_err();
        match err {
            IndexError::MalformedFrontmatter { url, date } => {
                assert_eq!(url, "/bad");
                assert_eq!(date.as_deref(), Some("not-a-date"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_date() {
        let entries = vec![entry("/bad", Some("Bad"), None, None)];
        let err = builder().build_index(&entries).unwrap_err();
        assert!(matches!(err, IndexError::MalformedFrontmatter { .. }));
    }

    #[test]
    fn test_missing_title() {
        let entries = vec![entry("/untitled", None, Some("2024-01-05"), None)];
        let err = builder().build_index(&entries).unwrap_err();
        match err {
            IndexError::MissingTitle { url } => assert_eq!(url, "/untitled"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_first_bad_entry_fails_pass() {
        let entries = vec![
            entry("/ok", Some("Ok"), Some("2024-01-05"), None),
            entry("/bad", Some("Bad"), Some("someday"), None),
        ];
        assert!(builder().build_index(&entries).is_err());
    }

    #[test]
    fn test_empty_input() {
        let posts = builder().build_index(&[]).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let entries = vec![entry("/a", Some("A"), Some("2024-01-05"), None)];
        let posts = builder().build_index(&entries).unwrap();
        let json = serde_json::to_value(&posts).unwrap();

        assert_eq!(json[0]["title"], "A");
        assert_eq!(json[0]["url"], "/a");
        assert_eq!(json[0]["date"]["time"], 1_704_456_000_000_i64);
        assert_eq!(json[0]["date"]["string"], "January 5, 2024");
        // Absent excerpt is omitted, not null
        assert!(json[0].get("excerpt").is_none());
    }
}
