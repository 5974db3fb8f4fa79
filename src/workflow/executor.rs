//! Runs workflow steps one after another, echoing each command and its output

use console::style;

use crate::errors::{CherryprError, Result};
use crate::git::{spawn_git, GitOptions};

use super::plan::Step;

/// Run one step and return its stdout.
///
/// The command is echoed before it runs; stdout is printed dimmed and stderr
/// in red once it finishes.
///
/// # Errors
/// * `StepFailed` - If git could not be spawned or exited non-zero
pub async fn run_step(step: &Step, options: &GitOptions) -> Result<String> {
    println!("{} {}", style("$").cyan(), step.command_line());

    let output = spawn_git(&step.args, options)
        .await
        .map_err(|e| CherryprError::StepFailed {
            step: step.description.clone(),
            message: e.to_string(),
        })?;

    if !output.stdout.is_empty() {
        println!("{}", style(output.stdout.trim_end()).dim());
    }
    if !output.stderr.is_empty() {
        eprintln!("{}", style(output.stderr.trim_end()).red());
    }
    println!();

    if !output.success {
        return Err(CherryprError::StepFailed {
            step: step.description.clone(),
            message: output.stderr.trim().to_string(),
        });
    }

    Ok(output.stdout)
}

/// Run `steps` in order, stopping at the first failure.
///
/// With `dry_run` the commands are echoed but not executed.
pub async fn run_steps(steps: &[Step], options: &GitOptions, dry_run: bool) -> Result<()> {
    for step in steps {
        if dry_run {
            tracing::info!("[DRY RUN] {}", step.description);
            println!("{} {}", style("$").cyan().dim(), style(step.command_line()).dim());
            continue;
        }
        run_step(step, options).await?;
    }
    Ok(())
}
