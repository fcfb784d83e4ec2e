use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_tags(ctx: &CommandContext, json: bool) -> Result<()> {
    let tags = ctx.store.tags();

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
    } else if tags.is_empty() {
        println!("No tags found.");
    } else {
        for entry in tags {
            println!("{:>4} {}", entry.count, entry.tag.yellow());
        }
    }
    Ok(())
}

pub fn handle_categories(ctx: &CommandContext, json: bool) -> Result<()> {
    let categories = ctx.store.categories();

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else if categories.is_empty() {
        println!("No categories found.");
    } else {
        for entry in categories {
            println!("{:>4} {}", entry.count, entry.category.blue());
        }
    }
    Ok(())
}
