use crate::error::FolioError;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::print_article;

pub fn handle_show(ctx: &CommandContext, slug: String, json: bool) -> Result<()> {
    let content = ctx
        .store
        .content(&slug)
        .into_visible()
        .ok_or_else(|| FolioError::NotFound(slug.clone()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    print_article(&content);

    let adjacent = ctx.store.adjacent(&slug);
    if adjacent.prev.is_some() || adjacent.next.is_some() {
        println!();
    }
    if let Some(prev) = adjacent.prev {
        println!("{} {} ({})", "Newer:".dimmed(), prev.title, prev.slug.cyan());
    }
    if let Some(next) = adjacent.next {
        println!("{} {} ({})", "Older:".dimmed(), next.title, next.slug.cyan());
    }
    Ok(())
}
