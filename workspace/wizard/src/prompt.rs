//! Blocking terminal prompts.
//!
//! Every stage of the wizard talks to the operator through [`Prompter`], so the
//! whole workflow can be driven by a scripted source in tests. The production
//! implementation is [`TerminalPrompter`], built on `dialoguer`.

use console::{Term, style};
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use tracing::{debug, trace};

use crate::error::Result;

/// Entry appended to search results that lets the operator refine the query.
const SEARCH_AGAIN: &str = "(search again)";

/// Choices offered in one search round: the candidates and a refine entry.
fn search_items(candidates: &[String]) -> Vec<String> {
    let mut items = candidates.to_vec();
    items.push(SEARCH_AGAIN.to_string());
    items
}

/// The label picked in one search round, `None` when the operator chose to
/// refine the query.
fn chosen_label(candidates: &[String], choice: usize) -> Option<&str> {
    candidates.get(choice).map(String::as_str)
}

fn no_match_line(query: &str) -> String {
    format!("No match for \"{}\"", query)
}

/// Sequential prompt/response and line output primitives.
pub trait Prompter {
    /// Free text answer. An empty answer returns `default` when one is given.
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String>;

    /// Pick any number of `items`; returns the chosen indices.
    fn multi_select(&mut self, message: &str, items: &[String]) -> Result<Vec<usize>>;

    /// Pick exactly one of `items`; returns its index.
    fn select(&mut self, message: &str, items: &[String]) -> Result<usize>;

    /// Yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Incremental search. `source` maps the current query to the candidate
    /// labels; the chosen label is returned verbatim.
    fn autocomplete(&mut self, message: &str, source: &dyn Fn(&str) -> Vec<String>)
    -> Result<String>;

    /// Section heading.
    fn heading(&mut self, text: &str) -> Result<()>;

    /// One `label: value` line.
    fn field(&mut self, label: &str, value: &str) -> Result<()>;

    /// Plain message line.
    fn message(&mut self, text: &str) -> Result<()>;
}

/// [`Prompter`] backed by the process terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true);
        if let Some(default) = default {
            // Empty defaults are not worth showing.
            input = input
                .default(default.to_string())
                .show_default(!default.is_empty());
        }
        Ok(input.interact_text_on(&self.term)?)
    }

    fn multi_select(&mut self, message: &str, items: &[String]) -> Result<Vec<usize>> {
        Ok(MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .interact_on(&self.term)?)
    }

    fn select(&mut self, message: &str, items: &[String]) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact_on(&self.term)?)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact_on(&self.term)?)
    }

    fn autocomplete(
        &mut self,
        message: &str,
        source: &dyn Fn(&str) -> Vec<String>,
    ) -> Result<String> {
        trace!("Entering autocomplete prompt");
        let mut query = String::new();
        loop {
            let candidates = source(&query);
            debug!("Query {:?} matched {} candidates", query, candidates.len());

            if candidates.is_empty() {
                self.term.write_line(&no_match_line(&query))?;
            } else {
                let choice = self.select(message, &search_items(&candidates))?;
                if let Some(label) = chosen_label(&candidates, choice) {
                    return Ok(label.to_string());
                }
            }

            query = self.input("Search", None)?;
        }
    }

    fn heading(&mut self, text: &str) -> Result<()> {
        self.term
            .write_line(&style(text).bold().underlined().to_string())?;
        Ok(())
    }

    fn field(&mut self, label: &str, value: &str) -> Result<()> {
        let label = format!("{}: ", label);
        self.term
            .write_line(&format!("{}{}", style(label).bold(), value))?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<()> {
        self.term.write_line(text)?;
        Ok(())
    }
}
