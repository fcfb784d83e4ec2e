mod export;
mod init;
mod list;
mod readtime;
mod route;
mod search;
mod serve;
mod show;
mod sync;
mod taxonomy;
mod toc;
mod utils;

pub use export::handle_export;
pub use init::handle_init;
pub use list::{ListParams, handle_archive, handle_list};
pub use readtime::handle_read_time;
pub use route::handle_route;
pub use search::handle_search;
pub use serve::handle_serve;
pub use show::handle_show;
pub use sync::handle_sync;
pub use taxonomy::{handle_categories, handle_tags};
pub use toc::handle_toc;

use crate::config::FolioConfig;
use crate::storage::{ArticleStore, CachePolicy};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: FolioConfig,
    pub root: PathBuf,
    pub store: ArticleStore,
}

impl CommandContext {
    pub fn new(config: FolioConfig, root: PathBuf) -> Self {
        // One-shot commands read the index at most once
        let store = ArticleStore::from_config(&config, &root, CachePolicy::Memoize);
        Self {
            config,
            root,
            store,
        }
    }

    /// Load the project config, either from an explicit path or by searching upward.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => FolioConfig::load_from(Path::new(path))
                .with_context(|| format!("Failed to load config from {}", path))?,
            None => {
                let cwd = std::env::current_dir()?;
                FolioConfig::load(&cwd)?
            }
        };
        Ok(Self::new(config, root))
    }
}
