//! Preflight check and prompt input validation

use regex::Regex;

use crate::errors::{CherryprError, Result};
use crate::schemas::StatusEntry;

lazy_static::lazy_static! {
    static ref BRANCH_NAME_REGEX: Regex = Regex::new(r"^[a-z-]+$").unwrap();
}

pub const MISSING_FILES_MESSAGE: &str = "You need to select at least one file.";
pub const MISSING_BRANCH_MESSAGE: &str = "You need to specify a branch name.";
pub const INVALID_BRANCH_MESSAGE: &str = "You need to specify small characters.";
pub const MISSING_MESSAGE_MESSAGE: &str = "You need to specify a commit message.";

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Refuse to run when anything is already staged.
///
/// Only entries whose index code is blank or `?` are allowed.
///
/// # Errors
/// * `StagedChanges` - If any entry has a staged change
pub fn check_preflight(entries: &[StatusEntry]) -> Result<()> {
    if let Some(entry) = entries.iter().find(|e| !e.is_unstaged()) {
        tracing::debug!(x = %entry.x, path = %entry.path, "Staged change blocks the run");
        return Err(CherryprError::StagedChanges);
    }
    Ok(())
}

/// At least one file must be chosen
pub fn validate_file_selection(selected: &[usize]) -> ValidationResult {
    if selected.is_empty() {
        return ValidationResult::failure(MISSING_FILES_MESSAGE);
    }
    ValidationResult::success()
}

/// Branch names are non-empty and made of lowercase letters and hyphens
pub fn validate_branch_name(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::failure(MISSING_BRANCH_MESSAGE);
    }
    if !BRANCH_NAME_REGEX.is_match(value) {
        return ValidationResult::failure(INVALID_BRANCH_MESSAGE);
    }
    ValidationResult::success()
}

pub fn validate_commit_message(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::failure(MISSING_MESSAGE_MESSAGE);
    }
    ValidationResult::success()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_preflight_allows_unstaged_and_untracked() {
        let entries = vec![
            StatusEntry::new(' ', 'M', "src/lib.rs"),
            StatusEntry::new('?', '?', "notes.txt"),
            StatusEntry::new(' ', 'D', "gone.rs"),
        ];
        assert!(check_preflight(&entries).is_ok());
    }

    #[test]
    fn test_check_preflight_allows_clean_tree() {
        assert!(check_preflight(&[]).is_ok());
    }

    #[test]
    fn test_check_preflight_rejects_staged() {
        for x in ['M', 'A', 'D', 'R', 'C', 'U'] {
            let entries = vec![
                StatusEntry::new(' ', 'M', "src/lib.rs"),
                StatusEntry::new(x, ' ', "staged.rs"),
            ];
            let result = check_preflight(&entries);
            assert!(
                matches!(result, Err(CherryprError::StagedChanges)),
                "index code {x:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_file_selection() {
        assert!(validate_file_selection(&[0]).valid);
        assert!(validate_file_selection(&[1, 3]).valid);

        let result = validate_file_selection(&[]);
        assert!(!result.valid);
        assert_eq!(result.reason.as_deref(), Some(MISSING_FILES_MESSAGE));
    }

    #[test]
    fn test_validate_branch_name() {
        assert!(validate_branch_name("feature").valid);
        assert!(validate_branch_name("my-fix").valid);

        assert_eq!(
            validate_branch_name("Feature1").reason.as_deref(),
            Some(INVALID_BRANCH_MESSAGE)
        );
        assert_eq!(
            validate_branch_name("feature-1").reason.as_deref(),
            Some(INVALID_BRANCH_MESSAGE)
        );
        assert_eq!(
            validate_branch_name("my fix").reason.as_deref(),
            Some(INVALID_BRANCH_MESSAGE)
        );
        assert_eq!(
            validate_branch_name("").reason.as_deref(),
            Some(MISSING_BRANCH_MESSAGE)
        );
    }

    #[test]
    fn test_validate_commit_message() {
        assert!(validate_commit_message("Fix the parser").valid);

        let result = validate_commit_message("");
        assert!(!result.valid);
        assert_eq!(result.reason.as_deref(), Some(MISSING_MESSAGE_MESSAGE));
    }
}
