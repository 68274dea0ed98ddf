// UI for unattended runs.
// Output is passed through to the wrapped UI untouched. Prompts are
// answered from their defaults without ever reaching a terminal.

use std::fmt;

use crate::error::{Result, UiError};
use crate::table::Table;
use crate::ui::{ChoiceOpts, TextOpts, Ui, Validator};

pub struct NonInteractiveUi<U> {
    parent: U,
}

impl<U: Ui> NonInteractiveUi<U> {
    pub fn new(parent: U) -> Self {
        Self { parent }
    }

    pub fn into_inner(self) -> U {
        self.parent
    }
}

/// Runs the optional validator against a default. `Ok(false)` means the
/// default was rejected without an error.
fn default_accepted<T>(validate: Option<&Validator<T>>, default: &T) -> Result<bool> {
    match validate {
        Some(validate) => validate(default).map_err(UiError::Validation),
        None => Ok(true),
    }
}

impl<U: Ui> Ui for NonInteractiveUi<U> {
    fn error_line(&mut self, args: fmt::Arguments<'_>) {
        self.parent.error_line(args);
    }

    fn print_line(&mut self, args: fmt::Arguments<'_>) {
        self.parent.print_line(args);
    }

    fn begin_line(&mut self, args: fmt::Arguments<'_>) {
        self.parent.begin_line(args);
    }

    fn end_line(&mut self, args: fmt::Arguments<'_>) {
        self.parent.end_line(args);
    }

    fn print_block(&mut self, block: &[u8]) {
        self.parent.print_block(block);
    }

    fn print_error_block(&mut self, block: &str) {
        self.parent.print_error_block(block);
    }

    fn print_table(&mut self, table: &Table) {
        self.parent.print_table(table);
    }

    fn ask_for_text(&mut self, opts: TextOpts) -> Result<String> {
        // A rejected default without an error yields an empty answer.
        if default_accepted(opts.validate.as_ref(), &opts.default)? {
            Ok(opts.default)
        } else {
            Ok(String::new())
        }
    }

    fn ask_for_choice(&mut self, opts: ChoiceOpts) -> Result<usize> {
        if default_accepted(opts.validate.as_ref(), &opts.default)? {
            Ok(opts.default)
        } else {
            Ok(0)
        }
    }

    fn ask_for_password(&mut self, _label: &str) -> Result<String> {
        panic!("Cannot ask for password in non-interactive UI");
    }

    fn ask_for_confirmation(&mut self) -> Result<()> {
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn flush(&mut self) {
        self.parent.flush();
    }
}
