use crate::feed::export_feeds;
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_export(
    ctx: &CommandContext,
    site_url: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut site = ctx.config.site.clone();
    if let Some(url) = site_url {
        site.base_url = url;
        site.validate()?;
    }

    let output_dir = match output {
        Some(dir) => dir,
        None => ctx.config.output_path(&ctx.root),
    };

    // Feeds must not silently go out empty because the index is missing
    let articles = ctx.store.try_articles()?;
    let report = export_feeds(&site, &articles, &output_dir, Utc::now())?;

    println!("{} {}", "Wrote".green(), report.rss_path.display());
    println!("{} {}", "Wrote".green(), report.sitemap_path.display());
    println!("  {} published articles", report.items);
    Ok(())
}
