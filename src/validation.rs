//! Input validation for slugs and paths derived from them.

use crate::error::{FolioError, Result};

/// Maximum allowed length for a slug.
pub const MAX_SLUG_LENGTH: usize = 200;

/// Characters forbidden in slugs to prevent path traversal.
const FORBIDDEN_SLUG_CHARS: &[char] = &['/', '\\', '\0'];

/// Validates a slug before it is turned into `<slug>.md`.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(FolioError::InvalidSlug("Slug cannot be empty".to_string()));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(FolioError::InvalidSlug(format!(
            "Slug exceeds maximum length of {} characters",
            MAX_SLUG_LENGTH
        )));
    }
    for c in FORBIDDEN_SLUG_CHARS {
        if slug.contains(*c) {
            return Err(FolioError::InvalidSlug(format!(
                "Slug cannot contain '{}'",
                c.escape_default()
            )));
        }
    }
    // Separators are already gone, so only a bare dot component can escape the directory
    if slug == "." || slug == ".." {
        return Err(FolioError::InvalidSlug(format!(
            "Slug cannot be '{}' (path traversal)",
            slug
        )));
    }
    Ok(())
}

/// Validates that every slug in the index is unique.
pub fn validate_unique_slugs<'a, I>(slugs: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(FolioError::Validation(format!("Duplicate slug: {}", slug)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slug_valid() {
        assert!(validate_slug("hello-world").is_ok());
        assert!(validate_slug("advent-of-claude-2025").is_ok());
        assert!(validate_slug("中文标题").is_ok());
    }

    #[test]
    fn test_validate_slug_empty() {
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn test_validate_slug_too_long() {
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_slug_path_traversal() {
        assert!(validate_slug("..").is_err());
        assert!(validate_slug("../secret").is_err());
        assert!(validate_slug("a/b").is_err());
        assert!(validate_slug("a\\b").is_err());
        assert!(validate_slug("a\0b").is_err());
        assert!(validate_slug(".").is_err());
    }

    #[test]
    fn test_validate_slug_allows_dots_inside_name() {
        assert!(validate_slug("wait..").is_ok());
        assert!(validate_slug("v1..2").is_ok());
        assert!(validate_slug("...").is_ok());
    }

    #[test]
    fn test_validate_unique_slugs() {
        assert!(validate_unique_slugs(["a", "b"]).is_ok());
        assert!(matches!(
            validate_unique_slugs(["a", "b", "a"]),
            Err(FolioError::Validation(_))
        ));
    }
}
