use crate::error::FolioError;
use crate::storage::parse_markdown;
use crate::toc::extract_headings;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;
use super::readtime::read_markdown_input;

pub fn handle_toc(
    ctx: Option<&CommandContext>,
    slug: Option<String>,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let body = match (file, slug, ctx) {
        (Some(path), _, _) => parse_markdown(&read_markdown_input(&path.to_string_lossy())?).body,
        (None, Some(slug), Some(ctx)) => {
            ctx.store
                .content(&slug)
                .into_visible()
                .ok_or_else(|| FolioError::NotFound(slug.clone()))?
                .content
        }
        _ => anyhow::bail!("Either a slug or --file is required"),
    };

    let entries = extract_headings(&body);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No headings found.");
    } else {
        for entry in entries {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
            println!("{}{} {}", indent, entry.text, format!("#{}", entry.id).dimmed());
        }
    }
    Ok(())
}
