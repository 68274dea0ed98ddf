// UI contract shared by the terminal-backed and the non-interactive UI.
// Callers pick one implementation at startup and never branch on mode.

use std::fmt;

use crate::error::Result;
use crate::table::Table;

/// Checks a candidate answer. `Ok(false)` means invalid without a reason.
pub type Validator<T> = Box<dyn Fn(&T) -> anyhow::Result<bool>>;

/// Options for `Ui::ask_for_text`.
pub struct TextOpts {
    pub label: String,
    pub default: String,
    pub validate: Option<Validator<String>>,
}

impl TextOpts {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default: String::new(),
            validate: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    #[must_use]
    pub fn with_validator<F>(mut self, validate: F) -> Self
    where
        F: Fn(&String) -> anyhow::Result<bool> + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }
}

impl fmt::Debug for TextOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextOpts")
            .field("label", &self.label)
            .field("default", &self.default)
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// Options for `Ui::ask_for_choice`. `default` is an index into `choices`.
pub struct ChoiceOpts {
    pub label: String,
    pub default: usize,
    pub choices: Vec<String>,
    pub validate: Option<Validator<usize>>,
}

impl ChoiceOpts {
    pub fn new<I, S>(label: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            default: 0,
            choices: choices.into_iter().map(Into::into).collect(),
            validate: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: usize) -> Self {
        self.default = default;
        self
    }

    #[must_use]
    pub fn with_validator<F>(mut self, validate: F) -> Self
    where
        F: Fn(&usize) -> anyhow::Result<bool> + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }

    /// True when some choice reads exactly like the default index.
    pub fn default_matches_choice(&self) -> bool {
        let default = self.default.to_string();
        self.choices.iter().any(|choice| *choice == default)
    }
}

impl fmt::Debug for ChoiceOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceOpts")
            .field("label", &self.label)
            .field("default", &self.default)
            .field("choices", &self.choices)
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// Console output and prompts.
///
/// Output never fails from the caller's side: implementations that can hit
/// I/O errors report them elsewhere. Prompts return errors.
pub trait Ui {
    /// Writes a full line to the error stream.
    fn error_line(&mut self, args: fmt::Arguments<'_>);

    /// Writes a full line to the normal stream.
    fn print_line(&mut self, args: fmt::Arguments<'_>);

    /// Starts a line without terminating it.
    fn begin_line(&mut self, args: fmt::Arguments<'_>);

    /// Finishes a line started with `begin_line`.
    fn end_line(&mut self, args: fmt::Arguments<'_>);

    fn print_block(&mut self, block: &[u8]);

    /// Writes `block` verbatim to the normal stream.
    fn print_error_block(&mut self, block: &str);

    fn print_table(&mut self, table: &Table);

    fn ask_for_text(&mut self, opts: TextOpts) -> Result<String>;

    fn ask_for_choice(&mut self, opts: ChoiceOpts) -> Result<usize>;

    fn ask_for_password(&mut self, label: &str) -> Result<String>;

    /// `Ok(())` only when the user agreed to continue.
    fn ask_for_confirmation(&mut self) -> Result<()>;

    fn is_interactive(&self) -> bool;

    fn flush(&mut self);
}

impl<U: Ui + ?Sized> Ui for Box<U> {
    fn error_line(&mut self, args: fmt::Arguments<'_>) {
        (**self).error_line(args);
    }

    fn print_line(&mut self, args: fmt::Arguments<'_>) {
        (**self).print_line(args);
    }

    fn begin_line(&mut self, args: fmt::Arguments<'_>) {
        (**self).begin_line(args);
    }

    fn end_line(&mut self, args: fmt::Arguments<'_>) {
        (**self).end_line(args);
    }

    fn print_block(&mut self, block: &[u8]) {
        (**self).print_block(block);
    }

    fn print_error_block(&mut self, block: &str) {
        (**self).print_error_block(block);
    }

    fn print_table(&mut self, table: &Table) {
        (**self).print_table(table);
    }

    fn ask_for_text(&mut self, opts: TextOpts) -> Result<String> {
        (**self).ask_for_text(opts)
    }

    fn ask_for_choice(&mut self, opts: ChoiceOpts) -> Result<usize> {
        (**self).ask_for_choice(opts)
    }

    fn ask_for_password(&mut self, label: &str) -> Result<String> {
        (**self).ask_for_password(label)
    }

    fn ask_for_confirmation(&mut self) -> Result<()> {
        (**self).ask_for_confirmation()
    }

    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

impl<U: Ui + ?Sized> Ui for &mut U {
    fn error_line(&mut self, args: fmt::Arguments<'_>) {
        (**self).error_line(args);
    }

    fn print_line(&mut self, args: fmt::Arguments<'_>) {
        (**self).print_line(args);
    }

    fn begin_line(&mut self, args: fmt::Arguments<'_>) {
        (**self).begin_line(args);
    }

    fn end_line(&mut self, args: fmt::Arguments<'_>) {
        (**self).end_line(args);
    }

    fn print_block(&mut self, block: &[u8]) {
        (**self).print_block(block);
    }

    fn print_error_block(&mut self, block: &str) {
        (**self).print_error_block(block);
    }

    fn print_table(&mut self, table: &Table) {
        (**self).print_table(table);
    }

    fn ask_for_text(&mut self, opts: TextOpts) -> Result<String> {
        (**self).ask_for_text(opts)
    }

    fn ask_for_choice(&mut self, opts: ChoiceOpts) -> Result<usize> {
        (**self).ask_for_choice(opts)
    }

    fn ask_for_password(&mut self, label: &str) -> Result<String> {
        (**self).ask_for_password(label)
    }

    fn ask_for_confirmation(&mut self) -> Result<()> {
        (**self).ask_for_confirmation()
    }

    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_choice_compares_decimal_text() {
        let opts = ChoiceOpts::new("Pick", ["a", "b", "c"]).with_default(1);
        assert!(!opts.default_matches_choice());

        let opts = ChoiceOpts::new("Pick", ["0", "1", "2"]).with_default(1);
        assert!(opts.default_matches_choice());

        let opts = ChoiceOpts::new("Pick", ["10", "x"]).with_default(10);
        assert!(opts.default_matches_choice());
    }

    #[test]
    fn default_matches_choice_is_false_for_empty_choices() {
        let opts = ChoiceOpts::new("Pick", Vec::<String>::new());
        assert!(!opts.default_matches_choice());
    }

    #[test]
    fn text_opts_builder_sets_fields() {
        let opts = TextOpts::new("Name")
            .with_default("web")
            .with_validator(|value| Ok(!value.is_empty()));

        assert_eq!(opts.label, "Name");
        assert_eq!(opts.default, "web");
        let validate = opts.validate.as_ref().unwrap();
        assert!(validate(&opts.default).unwrap());
        assert!(!validate(&String::new()).unwrap());
    }

    #[test]
    fn opts_debug_hides_validator_body() {
        let opts = TextOpts::new("Name").with_validator(|_| Ok(true));
        assert_eq!(
            format!("{opts:?}"),
            "TextOpts { label: \"Name\", default: \"\", validate: true }"
        );
    }
}
