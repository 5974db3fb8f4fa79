//! Error types for the cherrypr CLI
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for cherrypr operations
pub type Result<T> = std::result::Result<T, CherryprError>;

/// Main error type for all cherrypr operations
#[derive(Debug, Error)]
pub enum CherryprError {
    /// Something is already staged, so the working tree cannot be split safely
    #[error("You are not allowed to have added files")]
    StagedChanges,

    /// Repository not found - no .git directory above the working directory
    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A read-only git query failed
    #[error("Git error: {0}")]
    GitError(String),

    /// One step of the branch workflow failed; later steps were not run
    #[error("Step '{step}' failed: {message}")]
    StepFailed { step: String, message: String },

    /// The origin URL does not have a shape we know how to turn into `org/repo`
    #[error("Unexpected remote URL: {0}")]
    InvalidRemote(String),

    /// The interactive prompt could not be shown or read
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// The comparison URL could not be opened
    #[error("Could not open browser: {0}")]
    BrowserError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CherryprError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            CherryprError::StagedChanges => "STAGED_CHANGES",
            CherryprError::RepoNotFound(_) => "REPO_NOT_FOUND",
            CherryprError::InvalidJson(_) => "INVALID_JSON",
            CherryprError::FileNotFound(_) => "FILE_NOT_FOUND",
            CherryprError::ConfigError(_) => "CONFIG_ERROR",
            CherryprError::GitError(_) => "GIT_ERROR",
            CherryprError::StepFailed { .. } => "STEP_FAILED",
            CherryprError::InvalidRemote(_) => "INVALID_REMOTE",
            CherryprError::PromptError(_) => "PROMPT_ERROR",
            CherryprError::BrowserError(_) => "BROWSER_ERROR",
            CherryprError::Io(_) => "IO_ERROR",
        }
    }
}

impl From<dialoguer::Error> for CherryprError {
    fn from(error: dialoguer::Error) -> Self {
        CherryprError::PromptError(error.to_string())
    }
}

/// Exit code used for every error that reaches the top-level handler
pub const FAILURE_EXIT_CODE: i32 = 1;
