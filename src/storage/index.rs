use crate::error::{FolioError, Result};
use crate::model::Article;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tempfile::NamedTempFile;

pub const INDEX_FILE_NAME: &str = "articles.json";

/// Where the article index and the per-article bodies come from.
pub trait ArticleSource: Send + Sync {
    /// Read the whole index, in stored order.
    fn load_index(&self) -> Result<Vec<Article>>;

    /// Raw markdown of `<slug>.md`; `Ok(None)` when there is no such file.
    fn read_body(&self, slug: &str) -> Result<Option<String>>;
}

/// Index and bodies on disk: `<dir>/articles.json` and `<dir>/<slug>.md`.
#[derive(Debug, Clone)]
pub struct FileSource {
    articles_dir: PathBuf,
}

impl FileSource {
    pub fn new(articles_dir: impl Into<PathBuf>) -> Self {
        Self {
            articles_dir: articles_dir.into(),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.articles_dir.join(INDEX_FILE_NAME)
    }

    pub fn body_path(&self, slug: &str) -> PathBuf {
        self.articles_dir.join(format!("{}.md", slug))
    }
}

impl ArticleSource for FileSource {
    fn load_index(&self) -> Result<Vec<Article>> {
        let path = self.index_path();
        let content = std::fs::read_to_string(&path)?;
        let articles: Vec<Article> = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), count = articles.len(), "Loaded article index");
        Ok(articles)
    }

    fn read_body(&self, slug: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.body_path(slug)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Fixed index and bodies held in memory.
#[derive(Debug, Default)]
pub struct MemorySource {
    articles: RwLock<Vec<Article>>,
    bodies: HashMap<String, String>,
}

impl MemorySource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
            bodies: HashMap::new(),
        }
    }

    pub fn with_body(mut self, slug: impl Into<String>, markdown: impl Into<String>) -> Self {
        self.bodies.insert(slug.into(), markdown.into());
        self
    }

    /// Swap the index, as a new sync run would.
    pub fn replace(&self, articles: Vec<Article>) {
        *self.articles.write().unwrap_or_else(|e| e.into_inner()) = articles;
    }
}

impl ArticleSource for MemorySource {
    fn load_index(&self) -> Result<Vec<Article>> {
        Ok(self
            .articles
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn read_body(&self, slug: &str) -> Result<Option<String>> {
        Ok(self.bodies.get(slug).cloned())
    }
}

/// Serialize `articles` as pretty JSON and replace `path` atomically.
pub fn write_index(path: &Path, articles: &[Article]) -> Result<()> {
    let content = serde_json::to_string_pretty(articles)?;
    atomic_write(path, &content)
}

pub(crate) fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    // Temp file must live in the target directory for the rename to be atomic
    let target_dir = target_path
        .parent()
        .ok_or_else(|| FolioError::Storage("Target path has no parent directory".to_string()))?;

    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| FolioError::Storage(format!("Failed to create temp file: {}", e)))?;

    use std::io::Write;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| FolioError::Storage(format!("Failed to write to temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| FolioError::Storage(format!("Failed to sync temp file: {}", e)))?;

    temp_file.persist(target_path).map_err(|e| {
        FolioError::Storage(format!(
            "Failed to persist {}: {}",
            target_path.display(),
            e.error
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_load_index() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::new(temp_dir.path());
        let articles = vec![
            Article::new("b", "B", "2024-02-01").with_tags(vec!["x".to_string()]),
            Article::new("a", "A", "2024-01-01").with_published(false),
        ];

        write_index(&source.index_path(), &articles).unwrap();
        let loaded = source.load_index().unwrap();

        assert_eq!(loaded, articles);
        let raw = std::fs::read_to_string(source.index_path()).unwrap();
        assert!(raw.contains("\"readTime\""));
    }

    #[test]
    fn test_missing_index_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::new(temp_dir.path());
        assert!(matches!(source.load_index(), Err(FolioError::Io(_))));
    }

    #[test]
    fn test_malformed_index_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::new(temp_dir.path());
        std::fs::write(source.index_path(), "{ not json").unwrap();
        assert!(matches!(source.load_index(), Err(FolioError::Json(_))));
    }

    #[test]
    fn test_read_body() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::new(temp_dir.path());
        std::fs::write(temp_dir.path().join("hello.md"), "# Hello").unwrap();

        assert_eq!(source.read_body("hello").unwrap().as_deref(), Some("# Hello"));
        assert_eq!(source.read_body("missing").unwrap(), None);
    }

    #[test]
    fn test_memory_source_replace() {
        let source = MemorySource::new(vec![Article::new("a", "A", "2024-01-01")]);
        source.replace(Vec::new());
        assert!(source.load_index().unwrap().is_empty());
    }
}
