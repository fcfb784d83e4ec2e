use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(
    author,
    version,
    about = "Flat-file article index, feeds and SPA server for a personal blog"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .folio.yml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new blog project in the current directory
    Init {
        /// Public site URL used for feed and sitemap links
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Regenerate the article index from the source directory
    Sync,

    /// Write rss.xml and sitemap.xml to the output directory
    Export {
        /// Override the configured site URL
        #[arg(long, env = "SITE_URL")]
        site_url: Option<String>,

        /// Override the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the public directory with live feeds
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,
    },

    /// List published articles, newest first
    #[command(visible_alias = "ls")]
    List {
        /// Only articles with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only articles in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only articles from this year
        #[arg(short, long)]
        year: Option<i32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an article with its body
    Show {
        /// Article slug
        slug: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Tag counts across published articles
    Tags {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Category counts across published articles
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Published articles grouped by year
    Archive {
        /// Only articles with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only articles in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search published articles
    ///
    /// Plain text matches title, description, category and tags.
    /// Use `field:pattern` (title, description, category, tag, slug) or `regex:pattern`.
    Search {
        /// Search query
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate the reading time of a markdown file
    ReadTime {
        /// Markdown file ('-' reads stdin)
        file: String,
    },

    /// Print the table of contents of an article
    Toc {
        /// Article slug
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        slug: Option<String>,

        /// Read a markdown file instead of a synced article
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which page a client-side path resolves to
    Route {
        /// Path with optional query, e.g. /archive?tag=rust
        target: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
