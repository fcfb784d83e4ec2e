//! # Folio - flat-file article metadata for a personal blog
//!
//! Folio turns a directory of markdown articles with YAML frontmatter into the
//! data a single-page blog needs: a JSON article index, copied bodies, an RSS
//! feed and a sitemap. It can also serve the built site with live feeds.
//!
//! ## Features
//!
//! - **Sync**: Regenerate `articles.json` from `articles/*.md`
//! - **Queries**: Published listings, tag and category counts, year archive, adjacency
//! - **Feeds**: RSS 2.0 and sitemap, written at build time or served per request
//! - **Server**: Static files with SPA fallback via axum
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a new blog project
//! folio init --base-url https://blog.example.com
//!
//! # Build the index after writing articles/hello.md
//! folio sync
//!
//! # Write rss.xml and sitemap.xml
//! folio export
//!
//! # Serve client/public on port 3000
//! folio serve
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`feed`]: RSS and sitemap rendering
//! - [`model`]: Data models (Article, ArticleContent, derived views)
//! - [`query`]: Pure queries over the index
//! - [`storage`]: Index and body access, frontmatter parsing, caching
//! - [`server`]: HTTP surface
//! - [`validation`]: Slug validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.folio.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `FolioError` enum and `Result<T>` type alias.
pub mod error;

/// RSS feed and sitemap generation.
pub mod feed;

/// Data models for folio.
pub mod model;

/// Listing, counting and grouping over the article index.
pub mod query;

/// File-based storage layer.
///
/// Reads the generated index and article bodies, and parses YAML frontmatter.
pub mod storage;

/// Offline synchronization from source markdown to the public index.
pub mod sync;

/// Input validation utilities.
pub mod validation;

pub mod logging;
pub mod readtime;
pub mod routes;
pub mod search;
pub mod server;
pub mod toc;
