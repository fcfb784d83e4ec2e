use super::Article;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Articles sharing the same year prefix, in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGroup {
    pub year: String,
    pub articles: Vec<Article>,
}

/// Neighbours of an article in the published sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Adjacent {
    pub prev: Option<Article>,
    pub next: Option<Article>,
}
