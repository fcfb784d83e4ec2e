use anyhow::Result;
use clap::Parser;

use folio::cli::handlers::{self, CommandContext, ListParams};
use folio::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    folio::logging::init(cli.verbose, cli.log_file.clone());

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init { base_url } => handlers::handle_init(base_url),
        Commands::ReadTime { file } => handlers::handle_read_time(file),
        Commands::Route { target, json } => handlers::handle_route(target, json),
        Commands::Toc {
            slug: None,
            file,
            json,
        } => handlers::handle_toc(None, None, file, json),
        Commands::Toc { slug, file, json } => {
            let ctx = CommandContext::load(config_path)?;
            handlers::handle_toc(Some(&ctx), slug, file, json)
        }
        Commands::Sync => handlers::handle_sync(&CommandContext::load(config_path)?),
        Commands::Export { site_url, output } => {
            handlers::handle_export(&CommandContext::load(config_path)?, site_url, output)
        }
        Commands::Serve { port, host } => {
            handlers::handle_serve(CommandContext::load(config_path)?, host, port)
        }
        Commands::List {
            tag,
            category,
            year,
            json,
        } => handlers::handle_list(
            &CommandContext::load(config_path)?,
            ListParams {
                tag,
                category,
                year,
                json,
            },
        ),
        Commands::Show { slug, json } => {
            handlers::handle_show(&CommandContext::load(config_path)?, slug, json)
        }
        Commands::Tags { json } => handlers::handle_tags(&CommandContext::load(config_path)?, json),
        Commands::Categories { json } => {
            handlers::handle_categories(&CommandContext::load(config_path)?, json)
        }
        Commands::Archive {
            tag,
            category,
            json,
        } => handlers::handle_archive(&CommandContext::load(config_path)?, tag, category, json),
        Commands::Search { query, json } => {
            handlers::handle_search(&CommandContext::load(config_path)?, query, json)
        }
    }
}
