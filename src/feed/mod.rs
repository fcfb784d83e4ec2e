//! RSS and sitemap rendering.
//!
//! Both renderers are pure: the same site settings, article list and timestamp
//! always produce the same text. Unpublished articles are skipped here, so
//! callers may pass the raw index. The export command and the HTTP handlers
//! call the same functions.

mod export;
mod rss;
mod sitemap;

pub use export::{ExportReport, RSS_FILE_NAME, SITEMAP_FILE_NAME, export_feeds};
pub use rss::render_rss;
pub use sitemap::{STATIC_PAGES, StaticPage, render_sitemap};

/// Escape the five XML special characters.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap `text` in a CDATA section, splitting any literal `]]>`.
pub(crate) fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}
