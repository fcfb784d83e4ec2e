//! File-based storage layer for folio.
//!
//! Articles are authored as markdown files with a frontmatter header. The sync
//! step turns a directory of them into `articles.json` plus copied bodies,
//! which the runtime reads back through an [`ArticleSource`].
//!
//! ## File Format
//!
//! ```markdown
//! ---
//! title: Hello, world
//! date: 2024-01-15
//! category: Notes
//! description: First post
//! published: true
//! tags: [intro, meta]
//! ---
//!
//! Body text.
//! ```
//!
//! ## Components
//!
//! - [`ArticleStore`]: cached index queries and body lookup
//! - [`ArticleSource`]: where the index and bodies come from ([`FileSource`], [`MemorySource`])
//! - [`parse_markdown`]: split and map a frontmatter header
//! - [`render_markdown`]: render a header and body back to markdown

mod index;
mod markdown;
mod repository;

pub use index::{ArticleSource, FileSource, INDEX_FILE_NAME, MemorySource, write_index};
pub(crate) use index::atomic_write;
pub use markdown::{
    DEFAULT_CATEGORY, DEFAULT_TITLE, Frontmatter, ParsedMarkdown, parse_markdown,
    render_markdown, split_frontmatter,
};
pub use repository::{ArticleStore, CachePolicy, ContentLookup, IndexCache};
