use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".folio.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub site: SiteSettings,

    #[serde(default)]
    pub paths: PathSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

/// Channel-level metadata shared by the RSS and sitemap renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String {
    "https://yourdomain.com".to_string()
}

fn default_title() -> String {
    "My Blog".to_string()
}

fn default_description() -> String {
    "Notes, essays and projects".to_string()
}

fn default_language() -> String {
    "zh-CN".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            title: default_title(),
            description: default_description(),
            language: default_language(),
        }
    }
}

impl SiteSettings {
    /// Base URL without a trailing slash, ready for joining paths.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn article_url(&self, slug: &str) -> String {
        format!("{}/article/{}", self.base(), slug)
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            FolioError::Config(format!("Invalid site.base_url '{}': {}", self.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FolioError::Config(format!(
                "site.base_url must be http or https, got '{}'",
                parsed.scheme()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Directory holding the authored markdown sources.
    #[serde(default = "default_source")]
    pub source: String,

    /// Directory served to the browser; articles land in `<public>/articles`.
    #[serde(default = "default_public")]
    pub public: String,

    /// Directory receiving the exported `rss.xml` and `sitemap.xml`.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_source() -> String {
    "articles".to_string()
}

fn default_public() -> String {
    "client/public".to_string()
}

fn default_output() -> String {
    "dist/public".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            public: default_public(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// IP address or hostname; hostnames are resolved when the server starts.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl FolioConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: FolioConfig = serde_yaml::from_str(&content)?;
        config.site.validate()?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| FolioError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded configuration");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(FolioError::NotInitialized);
            }
        }
    }

    pub fn source_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.paths.source)
    }

    pub fn public_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.paths.public)
    }

    /// Directory holding `articles.json` and the copied `<slug>.md` bodies.
    pub fn articles_path(&self, project_root: &Path) -> PathBuf {
        self.public_path(project_root).join("articles")
    }

    pub fn index_path(&self, project_root: &Path) -> PathBuf {
        self.articles_path(project_root).join(crate::storage::INDEX_FILE_NAME)
    }

    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.paths.output)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: FolioConfig = serde_yaml::from_str("site:\n  title: Notes\n").unwrap();
        assert_eq!(config.site.title, "Notes");
        assert_eq!(config.site.base_url, "https://yourdomain.com");
        assert_eq!(config.paths.source, "articles");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_base_strips_trailing_slash() {
        let site = SiteSettings {
            base_url: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(site.base(), "https://example.com");
        assert_eq!(site.article_url("hello"), "https://example.com/article/hello");
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut site = SiteSettings {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(site.validate(), Err(FolioError::Config(_))));

        site.base_url = "ftp://example.com".to_string();
        assert!(site.validate().is_err());

        site.base_url = "https://example.com".to_string();
        assert!(site.validate().is_ok());
    }

    #[test]
    fn test_find_config_walks_upward() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        FolioConfig::default()
            .save(&temp_dir.path().join(CONFIG_FILE_NAME))
            .unwrap();

        let (config, root) = FolioConfig::load(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
        assert_eq!(
            config.index_path(&root),
            temp_dir
                .path()
                .join("client/public/articles/articles.json")
        );
    }

    #[test]
    fn test_missing_config_is_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let result = FolioConfig::find_config_file(temp_dir.path());
        assert!(matches!(result, Err(FolioError::NotInitialized)));
    }
}
