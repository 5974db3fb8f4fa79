//! Domain rules: what may run, and what the user may answer

mod validation;

// Property-based tests (compiled only in test builds)
#[cfg(test)]
mod property_tests;

pub use validation::{
    check_preflight, validate_branch_name, validate_commit_message, validate_file_selection,
    ValidationResult, INVALID_BRANCH_MESSAGE, MISSING_BRANCH_MESSAGE, MISSING_FILES_MESSAGE,
    MISSING_MESSAGE_MESSAGE,
};
