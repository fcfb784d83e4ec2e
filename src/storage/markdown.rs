use crate::error::Result;
use regex::Regex;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;

const FRONTMATTER_DELIMITER: &str = "---";

pub const DEFAULT_TITLE: &str = "untitled";
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Opening `---` line, optional `key: value` block, closing `---` line, then the body verbatim.
static FRONTMATTER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)(.*)\z")
        .expect("frontmatter pattern is valid")
});

/// Recognized frontmatter fields with their defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub title: String,
    pub date: String,
    pub category: String,

    /// Explicit read time; `None` means estimate from the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,

    pub description: String,
    pub image: String,
    pub published: bool,
    pub tags: Vec<String>,
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            date: today(),
            category: DEFAULT_CATEGORY.to_string(),
            read_time: None,
            description: String::new(),
            image: String::new(),
            published: true,
            tags: Vec::new(),
        }
    }
}

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMarkdown {
    pub meta: Frontmatter,
    pub body: String,
}

/// Split `content` into the raw header block and the body.
///
/// Returns `None` when there is no delimited block at the start of the input.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let caps = FRONTMATTER_BLOCK.captures(content)?;
    let header = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());
    Some((header, body))
}

/// Parse a markdown file with an optional frontmatter header.
///
/// Never fails: a missing block means all defaults and the whole input as body,
/// an unreadable block means all defaults and the text after the block as body.
pub fn parse_markdown(content: &str) -> ParsedMarkdown {
    let Some((header, body)) = split_frontmatter(content) else {
        return ParsedMarkdown {
            meta: Frontmatter::default(),
            body: content.to_string(),
        };
    };

    let mapping = match serde_yaml::from_str::<Value>(header) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(Value::Null) => Mapping::new(),
        Ok(other) => {
            tracing::warn!(kind = ?other, "Frontmatter is not a key/value block, using defaults");
            Mapping::new()
        }
        Err(e) => {
            // Plain `key: value` lines such as `title: Rust: a primer` are not valid YAML.
            tracing::debug!(error = %e, "Frontmatter is not valid YAML, reading it line by line");
            scan_lines(header)
        }
    };

    ParsedMarkdown {
        meta: from_mapping(&mapping),
        body: body.to_string(),
    }
}

/// Map a parsed header through the field schema.
fn from_mapping(mapping: &Mapping) -> Frontmatter {
    let mut meta = Frontmatter::default();

    if let Some(title) = non_empty_string(mapping.get("title")) {
        meta.title = title;
    }
    if let Some(date) = non_empty_string(mapping.get("date")) {
        meta.date = date;
    }
    if let Some(category) = non_empty_string(mapping.get("category")) {
        meta.category = category;
    }
    meta.read_time = non_empty_string(mapping.get("readTime"));
    if let Some(description) = mapping.get("description").and_then(scalar_to_string) {
        meta.description = description;
    }
    if let Some(image) = mapping.get("image").and_then(scalar_to_string) {
        meta.image = image;
    }
    if let Some(published) = mapping.get("published") {
        meta.published = is_enabled(published);
    }
    if let Some(tags) = mapping.get("tags") {
        meta.tags = parse_tags(tags);
    }

    meta
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(scalar_to_string)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Only boolean `true` or the literal string `"true"` publish.
fn is_enabled(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        Value::Tagged(tagged) => is_enabled(&tagged.value),
        _ => false,
    }
}

fn parse_tags(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .filter_map(scalar_to_string)
            .map(|t| clean_tag(&t))
            .filter(|t| !t.is_empty())
            .collect(),
        Value::String(s) => {
            let s = s.trim();
            let inner = s
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .unwrap_or(s);
            inner
                .split(',')
                .map(clean_tag)
                .filter(|t| !t.is_empty())
                .collect()
        }
        Value::Tagged(tagged) => parse_tags(&tagged.value),
        other => scalar_to_string(other)
            .map(|t| clean_tag(&t))
            .filter(|t| !t.is_empty())
            .into_iter()
            .collect(),
    }
}

fn clean_tag(tag: &str) -> String {
    tag.trim().replace(['"', '\''], "")
}

/// Fallback for headers that YAML rejects: one `key: value` per line, split at the first colon.
fn scan_lines(header: &str) -> Mapping {
    let mut mapping = Mapping::new();
    for line in header.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = strip_quotes(value.trim());
        mapping.insert(
            Value::String(key.to_string()),
            Value::String(value.to_string()),
        );
    }
    mapping
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Render recognized fields back into a delimited header followed by `body`.
pub fn render_markdown(meta: &Frontmatter, body: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(meta)?;
    let yaml = yaml.trim();

    let mut output = String::new();
    output.push_str(FRONTMATTER_DELIMITER);
    output.push('\n');
    output.push_str(yaml);
    output.push('\n');
    output.push_str(FRONTMATTER_DELIMITER);
    output.push('\n');
    output.push_str(body);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markdown() {
        let parsed =
            parse_markdown("---\ntitle: Hello\npublished: false\ntags: [a, b]\n---\nBody text");
        assert_eq!(parsed.meta.title, "Hello");
        assert!(!parsed.meta.published);
        assert_eq!(parsed.meta.tags, vec!["a", "b"]);
        assert_eq!(parsed.body, "Body text");
    }

    #[test]
    fn test_all_fields() {
        let content = r#"---
title: "Quoted Title"
date: 2024-01-15
category: 'Engineering'
readTime: 7 分钟
description: A short summary
image: /images/cover.png
published: true
tags: ["rust", 'cli']
---

# Heading
"#;
        let parsed = parse_markdown(content);
        assert_eq!(parsed.meta.title, "Quoted Title");
        assert_eq!(parsed.meta.date, "2024-01-15");
        assert_eq!(parsed.meta.category, "Engineering");
        assert_eq!(parsed.meta.read_time.as_deref(), Some("7 分钟"));
        assert_eq!(parsed.meta.description, "A short summary");
        assert_eq!(parsed.meta.image, "/images/cover.png");
        assert!(parsed.meta.published);
        assert_eq!(parsed.meta.tags, vec!["rust", "cli"]);
        assert_eq!(parsed.body, "\n# Heading\n");
    }

    #[test]
    fn test_no_frontmatter_uses_defaults() {
        let parsed = parse_markdown("Just a body\nwith lines");
        assert_eq!(parsed.meta.title, DEFAULT_TITLE);
        assert_eq!(parsed.meta.category, DEFAULT_CATEGORY);
        assert_eq!(parsed.meta.date, today());
        assert!(parsed.meta.published);
        assert!(parsed.meta.tags.is_empty());
        assert!(parsed.meta.read_time.is_none());
        assert_eq!(parsed.body, "Just a body\nwith lines");
    }

    #[test]
    fn test_unclosed_block_is_all_body() {
        let content = "---\ntitle: Hello\nno closing line";
        let parsed = parse_markdown(content);
        assert_eq!(parsed.meta.title, DEFAULT_TITLE);
        assert_eq!(parsed.body, content);
    }

    #[test]
    fn test_empty_block() {
        let parsed = parse_markdown("---\n---\nbody");
        assert_eq!(parsed.meta.title, DEFAULT_TITLE);
        assert_eq!(parsed.body, "body");
    }

    #[test]
    fn test_bare_comma_tags() {
        let parsed = parse_markdown("---\ntags: a, b ,, c\n---\n");
        assert_eq!(parsed.meta.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_published_only_true_enables() {
        for (raw, expected) in [
            ("true", true),
            ("\"true\"", true),
            ("false", false),
            ("yes", false),
            ("1", false),
            ("", false),
        ] {
            let parsed = parse_markdown(&format!("---\npublished: {}\n---\n", raw));
            assert_eq!(parsed.meta.published, expected, "published: {}", raw);
        }
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let parsed = parse_markdown("---\ntitle: T\nauthor: someone\nlayout: post\n---\nx");
        assert_eq!(parsed.meta.title, "T");
        assert_eq!(parsed.body, "x");
    }

    #[test]
    fn test_colon_in_value_falls_back_to_line_scan() {
        let parsed = parse_markdown("---\ntitle: Rust: a primer\ncategory: \"Notes\"\n---\nbody");
        assert_eq!(parsed.meta.title, "Rust: a primer");
        assert_eq!(parsed.meta.category, "Notes");
        assert_eq!(parsed.body, "body");
    }

    #[test]
    fn test_numeric_scalars_become_strings() {
        let parsed = parse_markdown("---\ntitle: 2024\ntags: [1, two]\n---\n");
        assert_eq!(parsed.meta.title, "2024");
        assert_eq!(parsed.meta.tags, vec!["1", "two"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = parse_markdown("---\r\ntitle: Windows\r\n---\r\nbody\r\n");
        assert_eq!(parsed.meta.title, "Windows");
        assert_eq!(parsed.body, "body\r\n");
    }

    #[test]
    fn test_roundtrip() {
        let meta = Frontmatter {
            title: "true".to_string(),
            date: "2023-12-31".to_string(),
            category: "Life: misc".to_string(),
            read_time: None,
            description: "It's \"quoted\"".to_string(),
            image: "https://example.com/a.png".to_string(),
            published: false,
            tags: vec!["a b".to_string(), "中文".to_string()],
        };

        let rendered = render_markdown(&meta, "Body\n").unwrap();
        let parsed = parse_markdown(&rendered);

        assert_eq!(parsed.meta, meta);
        assert_eq!(parsed.body, "Body\n");
    }
}
