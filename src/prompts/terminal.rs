//! Terminal prompts backed by dialoguer

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};

use crate::domain::ValidationResult;
use crate::errors::Result;

use super::Prompter;

/// Prompts on stderr with dialoguer's colorful theme
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_on(&self.term)?;
        Ok(index)
    }

    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        let selected = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact_on(&self.term)?;
        Ok(selected)
    }

    fn input(
        &mut self,
        prompt: &str,
        validate: &dyn Fn(&str) -> ValidationResult,
    ) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|value: &String| -> std::result::Result<(), String> {
                let result = validate(value.as_str());
                if result.valid {
                    Ok(())
                } else {
                    Err(result.reason.unwrap_or_default())
                }
            })
            .interact_text_on(&self.term)?;
        Ok(value)
    }

    fn report_error(&mut self, message: &str) {
        let line = format!("{} {}", style("✘").red(), style(message).red());
        if let Err(e) = self.term.write_line(&line) {
            tracing::warn!("Could not write prompt error: {}", e);
        }
    }
}
