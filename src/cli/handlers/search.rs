use crate::search::SearchQuery;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_article_list;

pub fn handle_search(ctx: &CommandContext, query: String, json: bool) -> Result<()> {
    let parsed = SearchQuery::parse(&query).map_err(anyhow::Error::msg)?;
    let results = ctx.store.search(&parsed);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("Found {} results for '{}':\n", results.len(), query);
        print_article_list(&results);
    }
    Ok(())
}
