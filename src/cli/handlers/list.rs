use crate::query::ArchiveFilter;
use anyhow::Result;

use super::CommandContext;
use super::utils::{print_article_list, print_year_groups};

/// Parameters for list operation
pub struct ListParams {
    pub tag: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub json: bool,
}

pub fn handle_list(ctx: &CommandContext, params: ListParams) -> Result<()> {
    let mut articles = ctx.store.published();

    if let Some(ref tag) = params.tag {
        articles.retain(|a| a.has_tag(tag));
    }
    if let Some(ref category) = params.category {
        articles.retain(|a| &a.category == category);
    }
    if let Some(year) = params.year {
        let year = year.to_string();
        articles.retain(|a| a.year() == year);
    }

    if params.json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
    } else {
        print_article_list(&articles);
    }
    Ok(())
}

pub fn handle_archive(
    ctx: &CommandContext,
    tag: Option<String>,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    let groups = ctx.store.archive(&ArchiveFilter { tag, category });

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        print_year_groups(&groups);
    }
    Ok(())
}
