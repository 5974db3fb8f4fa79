//! Git operations module
//!
//! Provides wrappers for the git CLI: status, repository context and a
//! process runner used by the workflow.

mod operations;
mod remote;
mod status;

#[cfg(test)]
pub(crate) use operations::test_support;

pub use operations::{
    get_current_branch, get_repo_root, is_git_repo, run_git_command, run_git_raw, spawn_git,
    GitOptions, GitOutput,
};
pub use remote::{
    extract_repo_path, get_default_branch, get_remote_url, parse_default_branch,
    resolve_context, RepoContext,
};
pub use status::{get_status, parse_porcelain_status};
