//! Interactive option collection.
//!
//! The wizard is a fixed list of input steps. Each step reads one answer
//! through a [`Prompter`] and stores it in a [`ScaffoldOptions`], which then
//! goes through the same pipeline as the flag-driven path.

use anyhow::Result;
use camino::Utf8PathBuf;
use replkit_core::{profile, ScaffoldOptions};

/// Source of answers for the wizard
pub trait Prompter {
    /// Free-text answer; an empty answer is allowed when `allow_empty` is set
    fn input(&mut self, prompt: &str, default: Option<&str>, allow_empty: bool) -> Result<String>;

    /// Index of the chosen item
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Yes/no answer
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Wizard steps, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Title,
    Language,
    Private,
    Template,
}

impl WizardStep {
    pub const SEQUENCE: [WizardStep; 4] = [
        WizardStep::Title,
        WizardStep::Language,
        WizardStep::Private,
        WizardStep::Template,
    ];

    /// Ask this step's question and record the answer
    fn apply(self, prompter: &mut dyn Prompter, options: &mut ScaffoldOptions) -> Result<()> {
        match self {
            WizardStep::Title => {
                let default = Some(options.title.as_str()).filter(|t| !t.trim().is_empty());
                options.title = prompter.input("Repl title", default, false)?;
            }
            WizardStep::Language => {
                let items: Vec<String> = profile::profiles()
                    .map(|p| format!("{} ({})", p.language, p.entry_filename))
                    .collect();
                let default = profile::profiles()
                    .position(|p| p.language.as_str().eq_ignore_ascii_case(options.language.trim()))
                    .unwrap_or(0);
                let index = prompter.select("Language", &items, default)?;
                let chosen = profile::profiles()
                    .nth(index)
                    .ok_or_else(|| anyhow::anyhow!("Invalid language selection: {}", index))?;
                options.language = chosen.language.to_string();
            }
            WizardStep::Private => {
                options.private = prompter.confirm("Make the Repl private?", options.private)?;
            }
            WizardStep::Template => {
                let default = options.template.as_ref().map(|p| p.as_str());
                let answer = prompter.input("Template file (leave empty for none)", default, true)?;
                let answer = answer.trim();
                options.template = if answer.is_empty() {
                    None
                } else {
                    Some(Utf8PathBuf::from(answer))
                };
            }
        }
        Ok(())
    }
}

/// Run every step, starting from `defaults`
pub fn collect(prompter: &mut dyn Prompter, defaults: ScaffoldOptions) -> Result<ScaffoldOptions> {
    let mut options = defaults;
    for step in WizardStep::SEQUENCE {
        step.apply(prompter, &mut options)?;
    }
    Ok(options)
}

/// Prompter backed by the terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>, allow_empty: bool) -> Result<String> {
        let mut input = dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Ok(dialoguer::Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
