// Prompt engine: the piece that actually talks to the terminal.
// `WriterUi` only decides what to ask; the engine collects the answer.

use std::io;

use dialoguer::{Confirm, Input, Password, Select};

/// Collects answers from a user. Every call blocks until the user answers
/// or the terminal fails.
pub trait PromptEngine {
    /// Free-form text, pre-populated with `default`.
    fn text(&mut self, label: &str, default: &str) -> io::Result<String>;

    /// One of `items`; returns the selected position.
    fn select(&mut self, label: &str, items: &[String], default: usize) -> io::Result<usize>;

    /// Masked input.
    fn password(&mut self, label: &str) -> io::Result<String>;

    /// Yes/no question.
    fn confirm(&mut self, label: &str, default: bool) -> io::Result<bool>;
}

/// Engine backed by `dialoguer`. Prompts are drawn on stderr, which is
/// where `dialoguer` renders by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl PromptEngine for DialoguerPrompter {
    fn text(&mut self, label: &str, default: &str) -> io::Result<String> {
        let mut input = Input::<String>::new();
        input.with_prompt(label).allow_empty(true);
        if let Some(default) = shown_default(default) {
            input.default(default);
        }
        input.interact_text()
    }

    fn select(&mut self, label: &str, items: &[String], default: usize) -> io::Result<usize> {
        // `Select` accepts Enter on its default, so keep it inside the list.
        let default = default.min(items.len().saturating_sub(1));
        Select::new()
            .with_prompt(label)
            .items(items)
            .default(default)
            .interact()
    }

    fn password(&mut self, label: &str) -> io::Result<String> {
        Password::new().with_prompt(label).interact()
    }

    fn confirm(&mut self, label: &str, default: bool) -> io::Result<bool> {
        Confirm::new()
            .with_prompt(label)
            .default(default)
            .interact()
    }
}

/// An empty default would render as an empty `[]` hint, so leave it unset.
fn shown_default(default: &str) -> Option<String> {
    (!default.is_empty()).then(|| default.to_string())
}
