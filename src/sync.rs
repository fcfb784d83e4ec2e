//! Offline synchronization from authored markdown to the served article index.
//!
//! Every run regenerates `articles.json` wholesale, copies each source file
//! verbatim next to it, and removes copied files whose source is gone.

use crate::{
    error::{FolioError, Result},
    model::Article,
    readtime::estimate_read_time,
    storage::{INDEX_FILE_NAME, parse_markdown, write_index},
    validation,
};
use chrono::{DateTime, NaiveDate};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Slugs written to the index, newest first.
    pub synced: Vec<String>,
    /// File names deleted from the target directory.
    pub removed: Vec<String>,
    pub index_path: PathBuf,
}

fn markdown_files(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "md") {
            let Some(name) = path.file_name() else {
                continue;
            };
            names.push(name.to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Reduce a frontmatter date to `YYYY-MM-DD` when it starts with a recognizable date.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_utc().date().format("%Y-%m-%d").to_string();
    }
    if let Some(date) = raw
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    {
        return date.format("%Y-%m-%d").to_string();
    }
    tracing::warn!(date = raw, "Unrecognized date, keeping it as written");
    raw.to_string()
}

/// Build the index record for one source file.
pub fn article_from_markdown(slug: &str, markdown: &str) -> Article {
    let parsed = parse_markdown(markdown);
    let meta = parsed.meta;
    let read_time = meta
        .read_time
        .unwrap_or_else(|| estimate_read_time(&parsed.body));

    Article {
        slug: slug.to_string(),
        title: meta.title,
        date: normalize_date(&meta.date),
        category: meta.category,
        read_time,
        description: meta.description,
        image: meta.image,
        published: meta.published,
        tags: meta.tags,
    }
}

pub fn sync(source_dir: &Path, target_dir: &Path) -> Result<SyncReport> {
    if !source_dir.is_dir() {
        return Err(FolioError::Storage(format!(
            "Source directory does not exist: {}",
            source_dir.display()
        )));
    }

    let sources = markdown_files(source_dir)?;

    // Validate and parse everything first; a failure here leaves the target untouched
    let mut articles = Vec::with_capacity(sources.len());
    for name in &sources {
        let slug = name.strip_suffix(".md").unwrap_or(name);
        validation::validate_slug(slug)?;
        let markdown = std::fs::read_to_string(source_dir.join(name))?;
        articles.push(article_from_markdown(slug, &markdown));
    }
    validation::validate_unique_slugs(articles.iter().map(|a| a.slug.as_str()))?;

    std::fs::create_dir_all(target_dir)?;

    let mut removed = Vec::new();
    for stale in markdown_files(target_dir)? {
        if !sources.contains(&stale) {
            std::fs::remove_file(target_dir.join(&stale))?;
            tracing::info!(file = %stale, "Removed stale article");
            removed.push(stale);
        }
    }

    for name in &sources {
        std::fs::copy(source_dir.join(name), target_dir.join(name))?;
        tracing::debug!(file = %name, "Synced article");
    }

    // Stable: equal dates keep file-name order
    articles.sort_by(|a, b| b.date.cmp(&a.date));

    let index_path = target_dir.join(INDEX_FILE_NAME);
    write_index(&index_path, &articles)?;
    tracing::info!(count = articles.len(), path = %index_path.display(), "Wrote article index");

    Ok(SyncReport {
        synced: articles.into_iter().map(|a| a.slug).collect(),
        removed,
        index_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ArticleSource, FileSource};
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("articles");
        let target = temp_dir.path().join("public").join("articles");
        std::fs::create_dir_all(&source).unwrap();
        (temp_dir, source, target)
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("2024-01-15"), "2024-01-15");
        assert_eq!(normalize_date("2024-01-15T23:30:00-02:00"), "2024-01-16");
        assert_eq!(normalize_date("2024-01-15 10:00"), "2024-01-15");
        assert_eq!(normalize_date("soon"), "soon");
    }

    #[test]
    fn test_article_from_markdown() {
        let article = article_from_markdown(
            "intro",
            "---\ntitle: Intro\ndate: 2024-02-03\ntags: rust, cli\n---\nhello world",
        );
        assert_eq!(article.slug, "intro");
        assert_eq!(article.title, "Intro");
        assert_eq!(article.date, "2024-02-03");
        assert_eq!(article.read_time, "1 分钟");
        assert_eq!(article.tags, vec!["rust", "cli"]);
        assert!(article.published);
    }

    #[test]
    fn test_sync_writes_sorted_index_and_copies() {
        let (_tmp, source, target) = setup();
        let old = "---\ntitle: Old\ndate: 2023-05-01\n---\nold body";
        std::fs::write(source.join("old.md"), old).unwrap();
        std::fs::write(
            source.join("new.md"),
            "---\ntitle: New\ndate: 2024-05-01\npublished: false\n---\nnew body",
        )
        .unwrap();
        std::fs::write(source.join("notes.txt"), "ignored").unwrap();

        let report = sync(&source, &target).unwrap();

        assert_eq!(report.synced, vec!["new", "old"]);
        assert!(report.removed.is_empty());
        assert_eq!(std::fs::read_to_string(target.join("old.md")).unwrap(), old);
        assert!(!target.join("notes.txt").exists());

        let index = FileSource::new(&target).load_index().unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].slug, "new");
        assert!(!index[0].published);
    }

    #[test]
    fn test_sync_removes_stale_files() {
        let (_tmp, source, target) = setup();
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("renamed.md"), "stale").unwrap();
        std::fs::write(target.join("logo.png"), "keep").unwrap();
        std::fs::write(source.join("kept.md"), "---\ntitle: Kept\n---\n").unwrap();

        let report = sync(&source, &target).unwrap();

        assert_eq!(report.removed, vec!["renamed.md"]);
        assert!(!target.join("renamed.md").exists());
        assert!(target.join("logo.png").exists());
        assert!(target.join("kept.md").exists());
    }

    #[test]
    fn test_sync_regenerates_wholesale() {
        let (_tmp, source, target) = setup();
        std::fs::write(source.join("a.md"), "---\ntitle: A\ndate: 2024-01-01\n---\n").unwrap();
        sync(&source, &target).unwrap();

        std::fs::remove_file(source.join("a.md")).unwrap();
        std::fs::write(source.join("b.md"), "---\ntitle: B\ndate: 2024-01-02\n---\n").unwrap();
        let report = sync(&source, &target).unwrap();

        assert_eq!(report.synced, vec!["b"]);
        let index = FileSource::new(&target).load_index().unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index[0].title, "B");
    }

    #[test]
    fn test_dotted_file_names_sync() {
        let (_tmp, source, target) = setup();
        std::fs::write(source.join("wait...md"), "---\ntitle: Wait\n---\n").unwrap();

        let report = sync(&source, &target).unwrap();

        assert_eq!(report.synced, vec!["wait.."]);
        assert!(target.join("wait...md").exists());
    }

    #[test]
    fn test_failed_sync_leaves_target_unchanged() {
        let (_tmp, source, target) = setup();
        std::fs::write(source.join("good.md"), "---\ntitle: Good\n---\n").unwrap();
        sync(&source, &target).unwrap();
        let index_before = std::fs::read_to_string(target.join(INDEX_FILE_NAME)).unwrap();

        std::fs::remove_file(source.join("good.md")).unwrap();
        std::fs::write(source.join("fresh.md"), "---\ntitle: Fresh\n---\n").unwrap();
        std::fs::write(source.join("..md"), "---\ntitle: Dots\n---\n").unwrap();

        let result = sync(&source, &target);

        assert!(matches!(result, Err(FolioError::InvalidSlug(_))));
        assert!(target.join("good.md").exists());
        assert!(!target.join("fresh.md").exists());
        assert_eq!(
            std::fs::read_to_string(target.join(INDEX_FILE_NAME)).unwrap(),
            index_before
        );
    }

    #[test]
    fn test_missing_source_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = sync(&temp_dir.path().join("nope"), &temp_dir.path().join("out"));
        assert!(matches!(result, Err(FolioError::Storage(_))));
    }
}
