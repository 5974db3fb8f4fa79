//! Working-tree status
//!
//! Reads `git status --porcelain -z` and parses it into [`StatusEntry`] values.

use crate::errors::Result;
use crate::schemas::StatusEntry;

use super::operations::{run_git_raw, GitOptions};

/// Parse `git status --porcelain -z` output.
///
/// Format: `XY PATH\0`, or `XY PATH\0ORIG_PATH\0` for renames and copies.
/// With `-z` paths are never quoted and the destination comes first.
pub fn parse_porcelain_status(output: &str) -> Vec<StatusEntry> {
    let mut entries = Vec::new();
    let mut fields = output.split('\0');

    while let Some(record) = fields.next() {
        let mut chars = record.chars();
        let (Some(x), Some(y)) = (chars.next(), chars.next()) else {
            continue;
        };
        let Some(path) = record.get(3..).filter(|p| !p.is_empty()) else {
            continue;
        };

        let mut entry = StatusEntry::new(x, y, path);
        if matches!(x, 'R' | 'C') || matches!(y, 'R' | 'C') {
            if let Some(from) = fields.next().filter(|f| !f.is_empty()) {
                entry = entry.with_from(from);
            }
        }
        entries.push(entry);
    }

    entries
}

/// Query the working tree and return its entries in git's order
pub async fn get_status(options: &GitOptions) -> Result<Vec<StatusEntry>> {
    let output = run_git_raw(&["status", "--porcelain", "-z"], options).await?;
    Ok(parse_porcelain_status(&output))
}
