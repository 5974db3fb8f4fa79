//! Workflow executor
//!
//! Commits (when files were selected), captures the commit, moves it onto a
//! new branch cut from the default branch, pushes, returns to the original
//! branch and opens the pull-request comparison page.
//!
//! Nothing is rolled back: if a step fails the repository is left where that
//! step stopped, for example with the commit already dropped from the
//! original branch. The captured hash is printed so it can be recovered.

mod browser;
mod executor;
mod plan;

pub use browser::{open_url, opener};
pub use executor::{run_step, run_steps};
pub use plan::{branch_steps, capture_step, commit_steps, compare_url, Step};

use console::style;

use crate::errors::Result;
use crate::git::{GitOptions, RepoContext};
use crate::schemas::{Answers, Config};

/// Options for running the workflow
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    pub git: GitOptions,

    /// If true, echo mutating steps without executing them
    pub dry_run: bool,
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOutcome {
    /// Full name of the pushed branch
    pub branch: String,

    /// Hash of the commit that was moved
    pub commit: String,

    pub compare_url: String,
}

/// Run the whole sequence for the given answers
pub async fn run_workflow(
    answers: &Answers,
    ctx: &RepoContext,
    config: &Config,
    options: &WorkflowOptions,
) -> Result<WorkflowOutcome> {
    let branch = answers.combined_branch();
    tracing::info!(%branch, method = %answers.commit.method(), "Starting workflow");

    run_steps(&commit_steps(&answers.commit), &options.git, options.dry_run).await?;

    let commit = run_step(&capture_step(), &options.git)
        .await?
        .trim()
        .to_string();
    tracing::info!(%commit, "Captured commit");

    let steps = branch_steps(ctx, &config.remote, &branch, &commit);
    run_steps(&steps, &options.git, options.dry_run).await?;

    let url = compare_url(&config.web_url, &ctx.repo_path, &branch);
    if config.open_browser && !options.dry_run {
        open_url(&url).await?;
    } else {
        println!("{} {}", style("Open").cyan(), url);
    }

    Ok(WorkflowOutcome {
        branch,
        commit,
        compare_url: url,
    })
}
