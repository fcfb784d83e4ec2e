use crate::model::Article;
use regex::Regex;

/// Search query with optional field-specific and regex support
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Every article matches
    All,
    /// Case-insensitive substring
    Simple(String),
    Regex(Regex),
    Field {
        field: SearchField,
        pattern: Box<SearchQuery>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Description,
    Category,
    Tag,
    Slug,
}

impl SearchQuery {
    /// Parse a search query string
    /// Supports:
    /// - Empty: "" -> matches everything
    /// - Simple: "rust" -> title, description, category and tags
    /// - Field-specific: "tag:rust" -> tags only
    /// - Regex: "regex:^async" -> regex over the same fields
    /// - Combined: "title:regex:^Why" -> regex in the title only
    pub fn parse(query: &str) -> Result<Self, String> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchQuery::All);
        }

        if let Some((prefix, rest)) = query.split_once(':') {
            if let Ok(field) = prefix.parse::<SearchField>() {
                let pattern = Self::parse(rest)?;
                if matches!(pattern, SearchQuery::Field { .. }) {
                    return Err(format!("Nested field search is not supported: {}", query));
                }
                return Ok(SearchQuery::Field {
                    field,
                    pattern: Box::new(pattern),
                });
            }

            if prefix == "regex" {
                let regex = Regex::new(rest).map_err(|e| format!("Invalid regex: {}", e))?;
                return Ok(SearchQuery::Regex(regex));
            }
        }

        Ok(SearchQuery::Simple(query.to_lowercase()))
    }

    fn matches_text(&self, text: &str) -> bool {
        match self {
            SearchQuery::All => true,
            SearchQuery::Simple(needle) => text.to_lowercase().contains(needle.as_str()),
            SearchQuery::Regex(regex) => regex.is_match(text),
            SearchQuery::Field { .. } => false,
        }
    }

    fn matches_field(&self, field: SearchField, article: &Article) -> bool {
        match field {
            SearchField::Title => self.matches_text(&article.title),
            SearchField::Description => self.matches_text(&article.description),
            SearchField::Category => self.matches_text(&article.category),
            SearchField::Tag => article.tags.iter().any(|tag| self.matches_text(tag)),
            SearchField::Slug => self.matches_text(&article.slug),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            SearchQuery::Field { field, pattern } => pattern.matches_field(*field, article),
            _ => [
                SearchField::Title,
                SearchField::Description,
                SearchField::Category,
                SearchField::Tag,
            ]
            .into_iter()
            .any(|field| self.matches_field(field, article)),
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "description" | "desc" => Ok(SearchField::Description),
            "category" => Ok(SearchField::Category),
            "tag" | "tags" => Ok(SearchField::Tag),
            "slug" => Ok(SearchField::Slug),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

/// Published articles matching `query`, in index order.
pub fn search<'a>(articles: &'a [Article], query: &SearchQuery) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| a.published && query.matches(a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_article() -> Article {
        Article::new("parser-notes", "Why Parsers Fail", "2024-05-01")
            .with_category("Engineering")
            .with_description("Lessons from malformed input")
            .with_tags(vec!["rust".to_string(), "parsing".to_string()])
    }

    #[test]
    fn test_simple_search() {
        let article = create_test_article();

        assert!(SearchQuery::parse("parsers").unwrap().matches(&article));
        assert!(SearchQuery::parse("malformed").unwrap().matches(&article));
        assert!(SearchQuery::parse("engineer").unwrap().matches(&article));
        assert!(SearchQuery::parse("rust").unwrap().matches(&article));
        assert!(!SearchQuery::parse("nonexistent").unwrap().matches(&article));
    }

    #[test]
    fn test_simple_search_skips_slug() {
        let article = create_test_article();
        assert!(!SearchQuery::parse("notes").unwrap().matches(&article));
        assert!(SearchQuery::parse("slug:notes").unwrap().matches(&article));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let article = create_test_article();
        assert!(SearchQuery::parse("").unwrap().matches(&article));
        assert!(SearchQuery::parse("   ").unwrap().matches(&article));
    }

    #[test]
    fn test_field_specific_search() {
        let article = create_test_article();

        assert!(SearchQuery::parse("title:fail").unwrap().matches(&article));
        assert!(!SearchQuery::parse("title:malformed").unwrap().matches(&article));
        assert!(SearchQuery::parse("tag:parsing").unwrap().matches(&article));
        assert!(!SearchQuery::parse("tag:go").unwrap().matches(&article));
        assert!(SearchQuery::parse("category:engineering").unwrap().matches(&article));
    }

    #[test]
    fn test_regex_search() {
        let article = create_test_article();

        assert!(SearchQuery::parse("regex:^Why").unwrap().matches(&article));
        assert!(SearchQuery::parse("title:regex:Fail$").unwrap().matches(&article));
        assert!(!SearchQuery::parse("title:regex:^Fail").unwrap().matches(&article));
        assert!(SearchQuery::parse("regex:[invalid").is_err());
    }

    #[test]
    fn test_case_insensitive() {
        let article = create_test_article();
        assert!(SearchQuery::parse("WHY").unwrap().matches(&article));
        assert!(SearchQuery::parse("TITLE:why").unwrap().matches(&article));
    }

    #[test]
    fn test_search_excludes_unpublished() {
        let articles = vec![
            create_test_article(),
            Article::new("draft", "Why Drafts Hide", "2024-06-01").with_published(false),
        ];
        let query = SearchQuery::parse("why").unwrap();
        let found: Vec<_> = search(&articles, &query).iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(found, vec!["parser-notes"]);
    }
}
