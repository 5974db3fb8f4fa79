//! Interactive prompt sequence
//!
//! Asks for the commit method first, then for the fields that method needs:
//! files and a commit message only when files are being selected.

mod terminal;

pub use terminal::TerminalPrompter;

use console::style;

use crate::domain::{
    validate_branch_name, validate_commit_message, validate_file_selection, ValidationResult,
};
use crate::errors::{CherryprError, Result};
use crate::schemas::{Answers, BranchType, CommitPlan, Method, StatusEntry, BRANCH_TYPES, METHODS};

/// The prompt primitives the sequence is built from
pub trait Prompter {
    /// Pick one of `items`, returning its index
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Pick any number of `items`, returning their indices
    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;

    /// Read a line of text, re-prompting until `validate` accepts it
    fn input(&mut self, prompt: &str, validate: &dyn Fn(&str) -> ValidationResult)
        -> Result<String>;

    /// Tell the user why an answer was rejected
    fn report_error(&mut self, message: &str);
}

/// Label for a file choice: the work-tree code, coloured, then the path
pub fn file_choice_label(entry: &StatusEntry) -> String {
    let code = match entry.y {
        '?' => style(entry.y).red(),
        'M' => style(entry.y).green(),
        _ => style(entry.y).cyan(),
    };
    format!("{} {}", code, entry.path)
}

/// Run both prompt batches and return the answers
pub fn collect_answers<P: Prompter + ?Sized>(
    prompter: &mut P,
    entries: &[StatusEntry],
) -> Result<Answers> {
    let method = prompt_method(prompter)?;

    let files = match method {
        Method::SelectFiles => Some(prompt_files(prompter, entries)?),
        Method::LastCommit => None,
    };

    let branch_type = prompt_branch_type(prompter)?;

    let branch_prompt = format!(
        "Branch name {}",
        style(format!("{}/", branch_type)).dim()
    );
    let branch = prompter.input(&branch_prompt, &validate_branch_name)?;

    let commit = match files {
        Some(files) => {
            let message = prompter.input("Commit message", &validate_commit_message)?;
            CommitPlan::SelectFiles { files, message }
        }
        None => CommitPlan::LastCommit,
    };

    Ok(Answers {
        commit,
        branch_type,
        branch,
    })
}

fn prompt_method<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Method> {
    let labels: Vec<String> = METHODS.iter().map(|m| m.to_string()).collect();
    let index = prompter.select("Method", &labels)?;
    METHODS
        .get(index)
        .copied()
        .ok_or_else(|| CherryprError::PromptError(format!("No method at index {}", index)))
}

fn prompt_branch_type<P: Prompter + ?Sized>(prompter: &mut P) -> Result<BranchType> {
    let labels: Vec<String> = BRANCH_TYPES.iter().map(|t| t.to_string()).collect();
    let index = prompter.select("Type", &labels)?;
    BRANCH_TYPES
        .get(index)
        .copied()
        .ok_or_else(|| CherryprError::PromptError(format!("No branch type at index {}", index)))
}

/// Ask for files until at least one is chosen
fn prompt_files<P: Prompter + ?Sized>(
    prompter: &mut P,
    entries: &[StatusEntry],
) -> Result<Vec<String>> {
    if entries.is_empty() {
        return Err(CherryprError::PromptError(
            "There are no changed files to select".to_string(),
        ));
    }

    let labels: Vec<String> = entries.iter().map(file_choice_label).collect();
    loop {
        let selected = prompter.multi_select("Files to commit", &labels)?;
        let result = validate_file_selection(&selected);
        if !result.valid {
            prompter.report_error(result.reason.as_deref().unwrap_or_default());
            continue;
        }

        return selected
            .into_iter()
            .map(|i| {
                entries.get(i).map(|e| e.path.clone()).ok_or_else(|| {
                    CherryprError::PromptError(format!("No file at index {}", i))
                })
            })
            .collect();
    }
}
