use crate::readtime::estimate_read_time;
use crate::storage::parse_markdown;
use anyhow::{Context, Result};
use std::io::{self, Read};

/// Read a markdown file (or stdin for `-`)
pub(super) fn read_markdown_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))
}

pub fn handle_read_time(file: String) -> Result<()> {
    let markdown = read_markdown_input(&file)?;
    // Only the body counts; a frontmatter header would inflate the estimate
    let parsed = parse_markdown(&markdown);
    println!("{}", estimate_read_time(&parsed.body));
    Ok(())
}
