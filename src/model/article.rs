use serde::{Deserialize, Serialize};

fn default_published() -> bool {
    true
}

/// One entry of the generated article index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,

    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,

    pub category: String,

    #[serde(default)]
    pub read_time: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image: String,

    #[serde(default = "default_published")]
    pub published: bool,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            date: date.into(),
            category: crate::storage::DEFAULT_CATEGORY.to_string(),
            read_time: String::new(),
            description: String::new(),
            image: String::new(),
            published: true,
            tags: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = read_time.into();
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// The text before the first `-` of `date`.
    pub fn year(&self) -> &str {
        self.date.split('-').next().unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Midnight UTC of `date`, if it parses.
    pub fn published_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

/// An article together with its markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleContent {
    #[serde(flatten)]
    pub article: Article,
    pub content: String,
}
