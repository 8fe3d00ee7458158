// Input boundary: checks run before anything reaches the store

use eyre::{Result, eyre};

/// Trim a raw description and reject it if nothing is left
pub fn validate_description(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(eyre!("Task description is required"));
    }
    Ok(trimmed.to_string())
}

/// Parse a task id as typed by the user
///
/// Accepts the bare number or the `[id]` tag shown by the text renderer.
pub fn parse_task_id(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed)
        .trim();

    if inner.is_empty() {
        return Err(eyre!("Task id is required"));
    }

    inner
        .parse::<u64>()
        .map_err(|e| eyre!("Invalid task id '{}': {}", inner, e))
}
