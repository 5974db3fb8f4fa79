//! Cherrypr - move a commit onto a fresh branch and open a pull request
//!
//! The flow is linear:
//! - read the working-tree status and refuse to run if anything is staged
//! - resolve the remote URL, the default branch and the current branch
//! - ask how to obtain the commit and what to call the branch
//! - commit if needed, capture the commit, reset, branch off the default
//!   branch, cherry-pick, push, switch back and open the comparison page

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod git;
pub mod prompts;
pub mod schemas;
pub mod workflow;

// Re-export commonly used types
pub use errors::{CherryprError, Result};
pub use schemas::{Answers, BranchType, CommitPlan, Config, Method, StatusEntry};
