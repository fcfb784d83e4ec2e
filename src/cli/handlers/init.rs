use crate::config::{CONFIG_FILE_NAME, FolioConfig};
use crate::error::FolioError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(base_url: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(FolioError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let mut config = FolioConfig::default();
    if let Some(url) = base_url {
        config.site.base_url = url;
    }
    config.site.validate()?;

    let source_path = config.source_path(&cwd);
    std::fs::create_dir_all(&source_path)?;
    std::fs::create_dir_all(config.articles_path(&cwd))?;

    config.save(&config_path)?;
    tracing::info!(path = %config_path.display(), "Initialized project");

    println!("{} blog project in {}", "Initialized".green(), cwd.display());
    println!("  Config:   {}", config_path.display());
    println!("  Articles: {}", source_path.display());
    Ok(())
}
