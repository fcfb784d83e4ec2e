//! Table-of-contents extraction for article bodies.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(#{1,3})[ \t]+(.+?)[ \t]*#*[ \t]*$").expect("valid heading regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    pub level: u8,
}

fn is_fence(line: &str) -> Option<&'static str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("```") {
        Some("```")
    } else if trimmed.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}

fn unique_id(used: &mut HashSet<String>, base: String) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Collect ATX headings of level 1 to 3, skipping fenced code blocks.
///
/// Ids are slugified heading text; headings with no sluggable text fall back
/// to `heading-<n>`. An id already taken gets the first free `-2`, `-3`, ...
/// suffix, so every returned id is distinct.
pub fn extract_headings(markdown: &str) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    let mut used: HashSet<String> = HashSet::new();
    let mut fence: Option<&'static str> = None;

    for line in markdown.lines() {
        if let Some(open) = fence {
            if line.trim_start().starts_with(open) {
                fence = None;
            }
            continue;
        }
        if let Some(marker) = is_fence(line) {
            fence = Some(marker);
            continue;
        }

        let Some(caps) = HEADING_RE.captures(line) else {
            continue;
        };
        let text = caps[2].trim().to_string();
        if text.is_empty() {
            continue;
        }

        let mut base = slug::slugify(&text);
        if base.is_empty() {
            base = format!("heading-{}", entries.len() + 1);
        }
        let id = unique_id(&mut used, base);

        entries.push(TocEntry {
            id,
            text,
            level: caps[1].len() as u8,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_and_ids() {
        let toc = extract_headings("# Intro\ntext\n## Getting Started\n### Step One\n#### Too deep");
        assert_eq!(
            toc,
            vec![
                TocEntry { id: "intro".into(), text: "Intro".into(), level: 1 },
                TocEntry { id: "getting-started".into(), text: "Getting Started".into(), level: 2 },
                TocEntry { id: "step-one".into(), text: "Step One".into(), level: 3 },
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_are_suffixed() {
        let ids: Vec<String> = extract_headings("## Setup\n## Setup\n## Setup")
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["setup", "setup-2", "setup-3"]);
    }

    #[test]
    fn test_generated_suffix_is_reserved() {
        let ids: Vec<String> = extract_headings("## Setup\n## Setup\n## Setup 2")
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["setup", "setup-2", "setup-2-2"]);
    }

    #[test]
    fn test_fallback_ids_do_not_collide() {
        let md = "## Setup\n## Setup\n## Setup 2\n# !!!\n# Heading 1\n# Heading 4";
        let ids: Vec<String> = extract_headings(md)
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(
            ids,
            vec!["setup", "setup-2", "setup-2-2", "heading-4", "heading-1", "heading-4-2"]
        );
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_skips_fenced_code() {
        let md = "# Real\n```sh\n# not a heading\n```\n~~~\n## also not\n~~~\n## After";
        let texts: Vec<String> = extract_headings(md).into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["Real", "After"]);
    }

    #[test]
    fn test_requires_space_and_strips_closing_hashes() {
        let toc = extract_headings("#hashtag\n## Closed ##");
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].text, "Closed");
    }

    #[test]
    fn test_unsluggable_heading_falls_back() {
        let toc = extract_headings("# !!!\n## ???");
        assert_eq!(toc[0].id, "heading-1");
        assert_eq!(toc[1].id, "heading-2");
    }
}
