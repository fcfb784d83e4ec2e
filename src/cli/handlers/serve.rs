use crate::server::{AppState, resolve_listen_addr, run_server};
use crate::storage::{ArticleStore, CachePolicy};
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);

    // Feeds re-read the index per request so a sync shows up without restart
    let store = ArticleStore::from_config(&ctx.config, &ctx.root, CachePolicy::Refetch);
    let public_dir = ctx.config.public_path(&ctx.root);
    let state = AppState::new(store, ctx.config.site, public_dir);

    tokio::runtime::Runtime::new()?.block_on(async {
        let addr = resolve_listen_addr(&host, port).await?;

        println!("Serving blog on http://{}", addr);
        println!("RSS:     http://{}/rss.xml", addr);
        println!("Sitemap: http://{}/sitemap.xml", addr);

        run_server(state, addr).await
    })?;
    Ok(())
}
