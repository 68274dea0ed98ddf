// Error types returned by the prompt side of the UI. Output methods never
// fail from the caller's point of view, so only prompts show up here.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UiError>;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("Asking for text: {0}")]
    Text(#[source] io::Error),

    #[error("Asking for choice: {0}")]
    Choice(#[source] io::Error),

    #[error("Asking for password: {0}")]
    Password(#[source] io::Error),

    #[error("Asking for confirmation: {0}")]
    Confirmation(#[source] io::Error),

    #[error("Stopped")]
    Stopped,

    #[error("Default value: {default} should match with one of the choices: {choices:?}")]
    DefaultNotInChoices { default: usize, choices: Vec<String> },

    /// The caller's validator rejected the default with an error.
    #[error(transparent)]
    Validation(anyhow::Error),
}

impl UiError {
    pub fn default_not_in_choices(default: usize, choices: &[String]) -> Self {
        Self::DefaultNotInChoices {
            default,
            choices: choices.to_vec(),
        }
    }
}
