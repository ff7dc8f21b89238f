use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Reads newline-delimited disqualifying substrings. Blank lines are skipped.
pub fn load_blacklist<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;
    let entries = parse_blacklist(&content);
    tracing::debug!(
        "Loaded {} blacklist entries from {}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(entries)
}

pub fn parse_blacklist(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
