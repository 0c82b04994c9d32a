//! Content module - discovery, frontmatter, and the post index

mod frontmatter;
pub mod index;
pub mod loader;
mod markdown;

pub use frontmatter::FrontMatter;
pub use index::{IndexError, PostDate, PostIndexBuilder, PostSummary};
pub use loader::{ContentScanner, ContentSource, RawContentEntry};
pub use markdown::MarkdownRenderer;
