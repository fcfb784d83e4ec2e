use super::{render_rss, render_sitemap};
use crate::config::SiteSettings;
use crate::error::Result;
use crate::model::Article;
use crate::storage::atomic_write;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

pub const RSS_FILE_NAME: &str = "rss.xml";
pub const SITEMAP_FILE_NAME: &str = "sitemap.xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub rss_path: PathBuf,
    pub sitemap_path: PathBuf,
    pub items: usize,
}

/// Write `rss.xml` and `sitemap.xml` into `output_dir`, creating it if needed.
pub fn export_feeds(
    site: &SiteSettings,
    articles: &[Article],
    output_dir: &Path,
    now: DateTime<Utc>,
) -> Result<ExportReport> {
    std::fs::create_dir_all(output_dir)?;

    let rss_path = output_dir.join(RSS_FILE_NAME);
    let sitemap_path = output_dir.join(SITEMAP_FILE_NAME);

    atomic_write(&rss_path, &render_rss(site, articles, now))?;
    atomic_write(&sitemap_path, &render_sitemap(site, articles, now.date_naive()))?;

    let items = articles.iter().filter(|a| a.published).count();
    tracing::info!(dir = %output_dir.display(), items, "Exported rss.xml and sitemap.xml");

    Ok(ExportReport {
        rss_path,
        sitemap_path,
        items,
    })
}
