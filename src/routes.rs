//! Client-side route table.
//!
//! The server hands every unknown path to the SPA shell; this is the mapping
//! the shell applies to decide which page to render.

use percent_encoding::percent_decode_str;
use serde::Serialize;

/// Paths kept working after the site moved articles under `/article/<slug>`.
const LEGACY_ARTICLE_ALIASES: &[&str] = &["advent-of-claude-2025"];
const LEGACY_HOME_ALIASES: &[&str] = &["writings"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum Route {
    Home,
    Archive {
        #[serde(skip_serializing_if = "Option::is_none")]
        tag: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
    About,
    Contact,
    Article {
        slug: String,
    },
    NotFound,
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

impl Route {
    /// Resolve a path and optional query string (without the leading `?`).
    pub fn resolve(path: &str, query: Option<&str>) -> Route {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .strip_prefix('/')
            .unwrap_or(trimmed)
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            [alias] if LEGACY_HOME_ALIASES.contains(alias) => Route::Home,
            ["archive"] => Route::Archive {
                tag: query_param(query, "tag"),
                category: query_param(query, "category"),
            },
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["article", slug] => Route::Article {
                slug: decode(slug),
            },
            [alias] if LEGACY_ARTICLE_ALIASES.contains(alias) => Route::Article {
                slug: (*alias).to_string(),
            },
            _ => Route::NotFound,
        }
    }

    /// Resolve a request target such as `/archive?tag=rust`.
    pub fn from_target(target: &str) -> Route {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };
        Route::resolve(path, query)
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Archive { tag, category } => {
                let mut query = url::form_urlencoded::Serializer::new(String::new());
                if let Some(tag) = tag {
                    query.append_pair("tag", tag);
                }
                if let Some(category) = category {
                    query.append_pair("category", category);
                }
                let query = query.finish();
                if query.is_empty() {
                    "/archive".to_string()
                } else {
                    format!("/archive?{}", query)
                }
            }
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Article { slug } => format!("/article/{}", slug),
            Route::NotFound => "/404".to_string(),
        }
    }
}
