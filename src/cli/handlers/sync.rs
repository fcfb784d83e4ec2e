use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_sync(ctx: &CommandContext) -> Result<()> {
    let source = ctx.config.source_path(&ctx.root);
    let target = ctx.config.articles_path(&ctx.root);

    let report = crate::sync::sync(&source, &target)?;
    ctx.store.invalidate();

    for removed in &report.removed {
        println!("{} {}", "Removed".red(), removed);
    }
    println!(
        "{} {} articles -> {}",
        "Synced".green(),
        report.synced.len(),
        report.index_path.display()
    );
    Ok(())
}
