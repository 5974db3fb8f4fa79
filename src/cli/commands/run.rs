//! Run command - status check, prompts, then the branch workflow

use std::path::Path;

use crate::config::load_config;
use crate::domain::check_preflight;
use crate::errors::{CherryprError, Result};
use crate::fs::resolve_cwd;
use crate::git::{get_repo_root, get_status, is_git_repo, resolve_context, GitOptions};
use crate::prompts::{collect_answers, Prompter, TerminalPrompter};
use crate::workflow::{run_workflow, WorkflowOptions, WorkflowOutcome};

/// Run the whole flow with terminal prompts
pub async fn run(cwd: Option<&Path>, dry_run: bool) -> Result<()> {
    let mut prompter = TerminalPrompter::new();
    run_with_prompter(cwd, dry_run, &mut prompter).await?;
    Ok(())
}

/// Run the whole flow, asking questions through `prompter`
pub async fn run_with_prompter<P: Prompter + ?Sized>(
    cwd: Option<&Path>,
    dry_run: bool,
    prompter: &mut P,
) -> Result<WorkflowOutcome> {
    let cwd = resolve_cwd(cwd);
    if !is_git_repo(&cwd).await {
        return Err(CherryprError::GitError(format!(
            "Not in a git repository: {}",
            cwd.display()
        )));
    }

    // Status paths are root-relative, so every later git call runs at the root
    let root = get_repo_root(&GitOptions::new(&cwd)).await?;
    let config = load_config(&root)?;
    let options = GitOptions::new(&root);

    let entries = get_status(&options).await?;
    check_preflight(&entries)?;

    let ctx = resolve_context(&config, &options).await?;

    let answers = collect_answers(prompter, &entries)?;
    println!();

    let outcome = run_workflow(
        &answers,
        &ctx,
        &config,
        &WorkflowOptions {
            git: options,
            dry_run,
        },
    )
    .await?;

    tracing::info!(branch = %outcome.branch, commit = %outcome.commit, "Done");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::test_support::*;
    use crate::prompts::scripted::{Reply, ScriptedPrompter};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_staged_files_rejected_before_prompting() {
        let temp = setup_git_repo().await;
        std::fs::write(temp.path().join("staged.txt"), "staged").unwrap();
        git(temp.path(), &["add", "staged.txt"]).await;

        let mut prompter = ScriptedPrompter::new(vec![Reply::Select(0)]);
        let result = run_with_prompter(Some(temp.path()), true, &mut prompter).await;

        assert!(matches!(result, Err(CherryprError::StagedChanges)));
        assert!(prompter.prompts.is_empty());
    }

    #[tokio::test]
    async fn test_not_a_repository() {
        let temp = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new(vec![]);

        let result = run_with_prompter(Some(temp.path()), true, &mut prompter).await;
        match result {
            Err(CherryprError::GitError(message)) => {
                assert!(message.starts_with("Not in a git repository"))
            }
            other => panic!("expected GitError, got {:?}", other),
        }
        assert!(prompter.prompts.is_empty());
    }

    #[tokio::test]
    async fn test_missing_remote_fails_before_prompting() {
        let temp = setup_git_repo().await;
        let mut prompter = ScriptedPrompter::new(vec![Reply::Select(0)]);

        let result = run_with_prompter(Some(temp.path()), true, &mut prompter).await;
        assert!(matches!(result, Err(CherryprError::GitError(_))));
        assert!(prompter.prompts.is_empty());
    }

    /// A repository on branch `work` whose GitHub origin is rewritten to a
    /// local bare repository holding `main`
    async fn setup_with_remote() -> (TempDir, PathBuf, PathBuf) {
        let temp = TempDir::new().unwrap();
        let remote = temp.path().join("remote.git");
        let work = temp.path().join("work");
        std::fs::create_dir_all(&remote).unwrap();
        std::fs::create_dir_all(&work).unwrap();

        git(&remote, &["init", "--bare"]).await;
        git(&remote, &["symbolic-ref", "HEAD", "refs/heads/main"]).await;
        init_repo(&work).await;
        let origin = "git@github.com:org/repo.git";
        git(&work, &["config", &format!("url.{}.insteadOf", remote.display()), origin]).await;
        git(&work, &["remote", "add", "origin", origin]).await;
        git(&work, &["push", "-u", "origin", "main"]).await;
        git(&work, &["checkout", "-b", "work"]).await;

        (temp, remote, work)
    }

    #[tokio::test]
    async fn test_dry_run_with_scripted_answers() {
        let (_temp, _remote, work) = setup_with_remote().await;
        std::fs::write(work.join("README.md"), "# Changed").unwrap();

        let mut prompter = ScriptedPrompter::new(vec![
            Reply::Select(0),
            Reply::Select(1),
            Reply::Input("my-fix".to_string()),
        ]);
        let outcome = run_with_prompter(Some(work.as_path()), true, &mut prompter)
            .await
            .unwrap();

        assert_eq!(outcome.branch, "fixes/my-fix");
        assert_eq!(
            outcome.compare_url,
            "https://github.com/org/repo/compare/fixes/my-fix?expand=1"
        );
        assert_eq!(prompter.remaining(), 0);
    }

    #[tokio::test]
    async fn test_select_files_from_subdirectory() {
        let (_temp, remote, work) = setup_with_remote().await;
        std::fs::write(work.join(".cherrypr.json"), r#"{"open_browser": false}"#).unwrap();
        let info = work.join(".git").join("info");
        std::fs::create_dir_all(&info).unwrap();
        std::fs::write(info.join("exclude"), ".cherrypr.json\n").unwrap();
        let sub = work.join("sub");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join("a.txt"), "nested").unwrap();

        let mut prompter = ScriptedPrompter::new(vec![
            Reply::Select(1),
            Reply::MultiSelect(vec![0]),
            Reply::Select(0),
            Reply::Input("nested-file".to_string()),
            Reply::Input("Add nested file".to_string()),
        ]);
        let outcome = run_with_prompter(Some(sub.as_path()), false, &mut prompter)
            .await
            .unwrap();

        assert_eq!(outcome.branch, "feature/nested-file");
        assert_eq!(prompter.remaining(), 0);
        assert_eq!(git(&work, &["branch", "--show-current"]).await, "work");
        assert_eq!(
            git(&remote, &["show", "feature/nested-file:sub/a.txt"]).await,
            "nested"
        );
    }
}
