//! Pure queries over an article index.
//!
//! Every function here looks only at published articles; unpublished entries are
//! invisible to listings, aggregations, lookup and adjacency alike.

use crate::model::{Adjacent, Article, CategoryCount, TagCount, YearGroup};
use std::collections::HashMap;

/// Published articles in index order.
pub fn published(articles: &[Article]) -> Vec<&Article> {
    articles.iter().filter(|a| a.published).collect()
}

pub fn find_by_slug<'a>(articles: &'a [Article], slug: &str) -> Option<&'a Article> {
    articles.iter().find(|a| a.published && a.slug == slug)
}

/// Positional neighbours of `slug` within the published sequence.
pub fn adjacent(articles: &[Article], slug: &str) -> Adjacent {
    let visible = published(articles);
    let Some(index) = visible.iter().position(|a| a.slug == slug) else {
        return Adjacent::default();
    };

    Adjacent {
        prev: index
            .checked_sub(1)
            .and_then(|i| visible.get(i))
            .map(|a| (*a).clone()),
        next: visible.get(index + 1).map(|a| (*a).clone()),
    }
}

/// Count `key`s in first-seen order, then sort by descending count.
/// The sort is stable, so ties keep first-seen order.
fn count_by<'a, I>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        match positions.get(key) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn tag_counts(articles: &[Article]) -> Vec<TagCount> {
    let tags = published(articles)
        .into_iter()
        .flat_map(|a| a.tags.iter().map(String::as_str));
    count_by(tags)
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect()
}

pub fn category_counts(articles: &[Article]) -> Vec<CategoryCount> {
    let categories = published(articles)
        .into_iter()
        .map(|a| a.category.as_str());
    count_by(categories)
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

pub fn by_tag<'a>(articles: &'a [Article], tag: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| a.published && a.has_tag(tag))
        .collect()
}

pub fn by_category<'a>(articles: &'a [Article], category: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| a.published && a.category == category)
        .collect()
}

/// Group by year prefix, newest year first.
pub fn group_by_year<'a, I>(articles: I) -> Vec<YearGroup>
where
    I: IntoIterator<Item = &'a Article>,
{
    let mut groups: Vec<YearGroup> = Vec::new();
    for article in articles {
        let year = article.year();
        match groups.iter_mut().find(|g| g.year == year) {
            Some(group) => group.articles.push(article.clone()),
            None => groups.push(YearGroup {
                year: year.to_string(),
                articles: vec![article.clone()],
            }),
        }
    }
    groups.sort_by(|a, b| b.year.cmp(&a.year));
    groups
}

pub fn by_year(articles: &[Article]) -> Vec<YearGroup> {
    group_by_year(published(articles))
}

/// Optional tag and category narrowing used by the archive page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveFilter {
    pub tag: Option<String>,
    pub category: Option<String>,
}

impl ArchiveFilter {
    pub fn matches(&self, article: &Article) -> bool {
        let tag_ok = self.tag.as_deref().is_none_or(|tag| article.has_tag(tag));
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| article.category == category);
        tag_ok && category_ok
    }
}

pub fn archive(articles: &[Article], filter: &ArchiveFilter) -> Vec<YearGroup> {
    group_by_year(
        articles
            .iter()
            .filter(|a| a.published && filter.matches(a)),
    )
}
