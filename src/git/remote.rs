//! Repository context: remote URL, default branch and current branch

use regex::Regex;

use crate::errors::{CherryprError, Result};
use crate::schemas::Config;

use super::operations::{get_current_branch, run_git_command, GitOptions};

lazy_static::lazy_static! {
    static ref REPO_PATH_REGEX: Regex = Regex::new(r"^[^/\s]+/[^/\s]+$").unwrap();
}

/// Host of a web URL, e.g. `github.com` for `https://github.com/`
fn web_host(web_url: &str) -> &str {
    let rest = web_url.trim();
    let rest = rest.split_once("://").map_or(rest, |(_, rest)| rest);
    rest.split('/').next().unwrap_or(rest)
}

/// Remote URL prefixes for the host serving `web_url`
fn remote_prefixes(web_url: &str) -> Vec<String> {
    let host = web_host(web_url);
    vec![
        format!("git@{}:", host),
        format!("ssh://git@{}/", host),
        format!("https://{}/", host),
    ]
}

const HEAD_BRANCH_PREFIX: &str = "HEAD branch:";

/// Everything about the repository the workflow needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    /// Raw remote URL as configured
    pub origin_url: String,

    /// `org/repo` derived from the remote URL
    pub repo_path: String,

    /// Branch the remote designates as primary; empty if it could not be found
    pub default_branch: String,

    /// Branch checked out when the run started
    pub current_branch: String,
}

/// Derive `org/repo` from a remote URL hosted where `web_url` points.
///
/// # Errors
/// * `InvalidRemote` - If the URL is not on that host or the rest is not `org/repo`
pub fn extract_repo_path(url: &str, web_url: &str) -> Result<String> {
    let url = url.trim();
    let rest = remote_prefixes(web_url)
        .iter()
        .find_map(|prefix| url.strip_prefix(prefix.as_str()))
        .ok_or_else(|| CherryprError::InvalidRemote(url.to_string()))?;

    let rest = rest.trim_end_matches('/');
    let path = rest.strip_suffix(".git").unwrap_or(rest);

    if !REPO_PATH_REGEX.is_match(path) {
        return Err(CherryprError::InvalidRemote(url.to_string()));
    }
    Ok(path.to_string())
}

/// Find the `HEAD branch:` line of `git remote show` output.
///
/// Returns an empty string when no such line exists.
pub fn parse_default_branch(output: &str) -> String {
    output
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(HEAD_BRANCH_PREFIX))
        .map(|branch| branch.trim().to_string())
        .unwrap_or_default()
}

/// Get the configured URL of a remote
pub async fn get_remote_url(remote: &str, options: &GitOptions) -> Result<String> {
    let key = format!("remote.{}.url", remote);
    run_git_command(&["config", "--get", &key], options)
        .await
        .map_err(|_| CherryprError::GitError(format!("Remote '{}' has no URL configured", remote)))
}

/// Ask the remote which branch is its default
pub async fn get_default_branch(remote: &str, options: &GitOptions) -> Result<String> {
    let output = run_git_command(&["remote", "show", remote], options).await?;
    let branch = parse_default_branch(&output);
    if branch.is_empty() {
        tracing::warn!("No 'HEAD branch:' line in `git remote show {}` output", remote);
    }
    Ok(branch)
}

/// Resolve the remote URL, repository path, default branch and current branch
pub async fn resolve_context(config: &Config, options: &GitOptions) -> Result<RepoContext> {
    let origin_url = get_remote_url(&config.remote, options).await?;
    let default_branch = get_default_branch(&config.remote, options).await?;
    let current_branch = get_current_branch(options).await?;
    let repo_path = extract_repo_path(&origin_url, &config.web_url)?;

    tracing::debug!(
        %origin_url,
        %repo_path,
        %default_branch,
        %current_branch,
        "Resolved repository context"
    );

    Ok(RepoContext {
        origin_url,
        repo_path,
        default_branch,
        current_branch,
    })
}
