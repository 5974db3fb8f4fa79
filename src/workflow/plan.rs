//! The fixed sequence of git steps the workflow runs

use crate::git::RepoContext;
use crate::schemas::CommitPlan;

/// One git invocation and what it is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Short name used in progress output and failure messages
    pub description: String,

    /// Arguments passed to git
    pub args: Vec<String>,
}

impl Step {
    pub fn git(description: impl Into<String>, args: &[&str]) -> Self {
        Step {
            description: description.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The command as a user would type it
    pub fn command_line(&self) -> String {
        let mut line = String::from("git");
        for arg in &self.args {
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
                line.push_str(&format!("{:?}", arg));
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

/// Stage and commit the chosen files; nothing for `LastCommit`
pub fn commit_steps(plan: &CommitPlan) -> Vec<Step> {
    match plan {
        CommitPlan::LastCommit => Vec::new(),
        CommitPlan::SelectFiles { files, message } => {
            let mut add = Step::git("Stage selected files", &["add", "--"]);
            add.args.extend(files.iter().cloned());
            vec![add, Step::git("Commit selected files", &["commit", "-m", message])]
        }
    }
}

/// Read the hash of the commit that will be moved
pub fn capture_step() -> Step {
    Step::git("Capture commit", &["rev-parse", "HEAD"])
}

/// Move `commit` onto a new `branch` cut from the default branch, push it,
/// and return to the branch the run started on
pub fn branch_steps(ctx: &RepoContext, remote: &str, branch: &str, commit: &str) -> Vec<Step> {
    vec![
        Step::git("Drop commit from current branch", &["reset", "--hard", "HEAD~1"]),
        Step::git("Fetch remote", &["fetch", remote]),
        Step::git("Switch to default branch", &["checkout", &ctx.default_branch]),
        Step::git("Update default branch", &["pull"]),
        Step::git("Create branch", &["checkout", "-b", branch]),
        Step::git("Cherry-pick commit", &["cherry-pick", commit]),
        Step::git("Push branch", &["push", "--set-upstream", remote, branch]),
        Step::git("Return to original branch", &["checkout", &ctx.current_branch]),
    ]
}

/// Pull-request comparison page for `branch`
pub fn compare_url(web_url: &str, repo_path: &str, branch: &str) -> String {
    format!(
        "{}/{}/compare/{}?expand=1",
        web_url.trim_end_matches('/'),
        repo_path,
        branch
    )
}
