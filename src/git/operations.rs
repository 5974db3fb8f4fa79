//! Git CLI operations
//!
//! Wrappers for git commands with proper error handling.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::errors::{CherryprError, Result};

/// Options for git operations
#[derive(Debug, Clone)]
pub struct GitOptions {
    /// Working directory for git commands
    pub cwd: PathBuf,
}

impl GitOptions {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        GitOptions { cwd: cwd.into() }
    }
}

/// Captured output of a finished git command
#[derive(Debug, Clone, Default)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn git and wait for it, whatever its exit status
pub async fn spawn_git(args: &[String], options: &GitOptions) -> Result<GitOutput> {
    tracing::debug!("git {}", args.join(" "));

    let output = Command::new("git")
        .args(args)
        .current_dir(&options.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| CherryprError::GitError(format!("Failed to execute git: {}", e)))?;

    Ok(GitOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Execute a git command and return its untrimmed stdout
pub async fn run_git_raw(args: &[&str], options: &GitOptions) -> Result<String> {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let output = spawn_git(&args, options).await?;

    if !output.success {
        return Err(CherryprError::GitError(format!(
            "git {} failed: {}",
            args.join(" "),
            output.stderr.trim()
        )));
    }

    Ok(output.stdout)
}

/// Execute a git command and return trimmed stdout
pub async fn run_git_command(args: &[&str], options: &GitOptions) -> Result<String> {
    Ok(run_git_raw(args, options).await?.trim().to_string())
}

/// Check if a path is inside a git repository
pub async fn is_git_repo(cwd: &Path) -> bool {
    let output = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .current_dir(cwd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    matches!(output, Ok(status) if status.success())
}

/// Top-level directory of the repository containing `options.cwd`
///
/// Status paths are relative to this directory, so the workflow runs here.
pub async fn get_repo_root(options: &GitOptions) -> Result<PathBuf> {
    let root = run_git_command(&["rev-parse", "--show-toplevel"], options).await?;
    Ok(PathBuf::from(root))
}

/// Get the current branch name
pub async fn get_current_branch(options: &GitOptions) -> Result<String> {
    run_git_command(&["rev-parse", "--abbrev-ref", "HEAD"], options).await
}
