use super::index::{ArticleSource, FileSource};
use super::markdown::parse_markdown;
use crate::{
    config::FolioConfig,
    error::Result,
    model::{Adjacent, Article, ArticleContent, CategoryCount, TagCount, YearGroup},
    query::{self, ArchiveFilter},
    readtime::estimate_read_time,
    search::{self, SearchQuery},
    validation,
};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Whether the store keeps the index between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Load once, serve from memory until [`ArticleStore::invalidate`].
    #[default]
    Memoize,
    /// Load from the source on every call.
    Refetch,
}

/// Holds the loaded index. Empty until first use or after invalidation.
#[derive(Debug, Default)]
pub struct IndexCache {
    slot: RwLock<Option<Arc<Vec<Article>>>>,
}

impl IndexCache {
    pub fn get(&self) -> Option<Arc<Vec<Article>>> {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set(&self, articles: Arc<Vec<Article>>) {
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(articles);
    }

    pub fn invalidate(&self) {
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn is_populated(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

/// Outcome of fetching an article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLookup {
    Found(Box<ArticleContent>),
    NotFound,
    /// The body exists but its frontmatter says `published: false`.
    Unpublished,
}

impl ContentLookup {
    /// Unpublished articles are indistinguishable from missing ones to callers.
    pub fn into_visible(self) -> Option<ArticleContent> {
        match self {
            ContentLookup::Found(content) => Some(*content),
            ContentLookup::NotFound | ContentLookup::Unpublished => None,
        }
    }
}

pub struct ArticleStore {
    source: Arc<dyn ArticleSource>,
    cache: IndexCache,
    policy: CachePolicy,
}

impl ArticleStore {
    pub fn new(source: Arc<dyn ArticleSource>, policy: CachePolicy) -> Self {
        Self {
            source,
            cache: IndexCache::default(),
            policy,
        }
    }

    pub fn from_config(config: &FolioConfig, project_root: &Path, policy: CachePolicy) -> Self {
        let source = FileSource::new(config.articles_path(project_root));
        Self::new(Arc::new(source), policy)
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Drop the cached index so the next call reloads it.
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }

    /// Load the index, propagating failures. Used where a missing index must abort.
    pub fn try_articles(&self) -> Result<Arc<Vec<Article>>> {
        if self.policy == CachePolicy::Memoize {
            if let Some(cached) = self.cache.get() {
                return Ok(cached);
            }
        }

        // Concurrent first callers may each load; the result is identical.
        let loaded = Arc::new(self.source.load_index()?);
        if self.policy == CachePolicy::Memoize {
            self.cache.set(Arc::clone(&loaded));
        }
        Ok(loaded)
    }

    /// The full index, or an empty one when it cannot be loaded.
    pub fn articles(&self) -> Arc<Vec<Article>> {
        match self.try_articles() {
            Ok(articles) => articles,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load article index");
                Arc::new(Vec::new())
            }
        }
    }

    pub fn published(&self) -> Vec<Article> {
        let articles = self.articles();
        query::published(&articles).into_iter().cloned().collect()
    }

    pub fn get(&self, slug: &str) -> Option<Article> {
        let articles = self.articles();
        query::find_by_slug(&articles, slug).cloned()
    }

    pub fn adjacent(&self, slug: &str) -> Adjacent {
        query::adjacent(&self.articles(), slug)
    }

    pub fn tags(&self) -> Vec<TagCount> {
        query::tag_counts(&self.articles())
    }

    pub fn categories(&self) -> Vec<CategoryCount> {
        query::category_counts(&self.articles())
    }

    pub fn by_tag(&self, tag: &str) -> Vec<Article> {
        let articles = self.articles();
        query::by_tag(&articles, tag).into_iter().cloned().collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<Article> {
        let articles = self.articles();
        query::by_category(&articles, category)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn by_year(&self) -> Vec<YearGroup> {
        query::by_year(&self.articles())
    }

    pub fn archive(&self, filter: &ArchiveFilter) -> Vec<YearGroup> {
        query::archive(&self.articles(), filter)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<Article> {
        let articles = self.articles();
        search::search(&articles, query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Read and parse `<slug>.md`, merging frontmatter with the request slug.
    pub fn content(&self, slug: &str) -> ContentLookup {
        if let Err(e) = validation::validate_slug(slug) {
            tracing::debug!(slug, error = %e, "Rejected slug");
            return ContentLookup::NotFound;
        }

        let markdown = match self.source.read_body(slug) {
            Ok(Some(markdown)) => markdown,
            Ok(None) => return ContentLookup::NotFound,
            Err(e) => {
                tracing::error!(slug, error = %e, "Failed to load article body");
                return ContentLookup::NotFound;
            }
        };

        let parsed = parse_markdown(&markdown);
        let meta = parsed.meta;
        if !meta.published {
            return ContentLookup::Unpublished;
        }

        let read_time = meta
            .read_time
            .unwrap_or_else(|| estimate_read_time(&parsed.body));

        let article = Article {
            slug: slug.to_string(),
            title: meta.title,
            date: meta.date,
            category: meta.category,
            read_time,
            description: meta.description,
            image: meta.image,
            published: meta.published,
            tags: meta.tags,
        };

        ContentLookup::Found(Box::new(ArticleContent {
            article,
            content: parsed.body,
        }))
    }
}
