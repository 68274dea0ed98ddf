// Terminal-backed UI.
// - Output goes straight to the two streams handed in at construction.
// - Prompts go through a `PromptEngine`; each label is logged at debug level
//   before the engine is asked.
// - Write failures are never returned; they are handed to the
//   `ExternalLogger` under the `ui` tag.

use std::fmt;
use std::io::{self, IsTerminal, Stderr, Stdout, Write};

use crate::error::{Result, UiError};
use crate::logging::ExternalLogger;
use crate::prompt::{DialoguerPrompter, PromptEngine};
use crate::table::Table;
use crate::ui::{ChoiceOpts, TextOpts, Ui};

const LOG_TAG: &str = "ui";
const CONFIRMATION_LABEL: &str = "Continue?";

pub struct WriterUi<W, E> {
    out: W,
    err: E,
    prompter: Box<dyn PromptEngine>,
    logger: Box<dyn ExternalLogger>,
}

impl WriterUi<Stdout, Stderr> {
    /// UI bound to the process's stdout and stderr.
    pub fn console(logger: impl ExternalLogger + 'static) -> Self {
        Self::new(io::stdout(), io::stderr(), logger)
    }
}

impl<W: Write, E: Write> WriterUi<W, E> {
    pub fn new(out: W, err: E, logger: impl ExternalLogger + 'static) -> Self {
        Self {
            out,
            err,
            prompter: Box::new(DialoguerPrompter),
            logger: Box::new(logger),
        }
    }

    #[must_use]
    pub fn with_prompt_engine(mut self, prompter: impl PromptEngine + 'static) -> Self {
        self.prompter = Box::new(prompter);
        self
    }

    /// Gives back the streams, e.g. to inspect buffered output.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn log_prompt(&self, kind: &str, label: &str) {
        self.logger
            .debug(LOG_TAG, format_args!("Asking for {kind} (label='{label}')"));
    }

    fn log_failure(&self, operation: &str, message: &str, err: &io::Error) {
        self.logger.error(
            LOG_TAG,
            format_args!("UI.{operation} failed (message='{message}'): {err}"),
        );
    }
}

impl<W: Write + IsTerminal, E: Write> WriterUi<W, E> {
    /// Whether the normal stream is attached to a terminal.
    pub fn is_tty(&self) -> bool {
        self.out.is_terminal()
    }
}

impl<W: Write, E: Write> Ui for WriterUi<W, E> {
    fn error_line(&mut self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        if let Err(e) = writeln!(self.err, "{message}") {
            self.log_failure("ErrorLinef", &message, &e);
        }
    }

    fn print_line(&mut self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        if let Err(e) = writeln!(self.out, "{message}") {
            self.log_failure("PrintLinef", &message, &e);
        }
    }

    fn begin_line(&mut self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        if let Err(e) = write!(self.out, "{message}") {
            self.log_failure("BeginLinef", &message, &e);
        }
    }

    fn end_line(&mut self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        if let Err(e) = writeln!(self.out, "{message}") {
            self.log_failure("EndLinef", &message, &e);
        }
    }

    fn print_block(&mut self, block: &[u8]) {
        if let Err(e) = self.out.write_all(block) {
            self.log_failure("PrintBlock", &String::from_utf8_lossy(block), &e);
        }
    }

    fn print_error_block(&mut self, block: &str) {
        // Normal stream, not stderr; existing callers rely on this.
        if let Err(e) = self.out.write_all(block.as_bytes()) {
            self.log_failure("PrintErrorBlock", block, &e);
        }
    }

    fn print_table(&mut self, table: &Table) {
        if let Err(e) = table.print(&mut self.out) {
            self.logger
                .error(LOG_TAG, format_args!("UI.PrintTable failed: {e}"));
        }
    }

    fn ask_for_text(&mut self, opts: TextOpts) -> Result<String> {
        self.log_prompt("text", &opts.label);
        self.prompter
            .text(&opts.label, &opts.default)
            .map_err(UiError::Text)
    }

    fn ask_for_choice(&mut self, opts: ChoiceOpts) -> Result<usize> {
        if !opts.default_matches_choice() {
            return Err(UiError::default_not_in_choices(opts.default, &opts.choices));
        }

        self.log_prompt("choice", &opts.label);
        self.prompter
            .select(&opts.label, &opts.choices, opts.default)
            .map_err(UiError::Choice)
    }

    fn ask_for_password(&mut self, label: &str) -> Result<String> {
        self.log_prompt("password", label);
        self.prompter.password(label).map_err(UiError::Password)
    }

    fn ask_for_confirmation(&mut self) -> Result<()> {
        self.log_prompt("confirmation", CONFIRMATION_LABEL);
        let confirmed = self
            .prompter
            .confirm(CONFIRMATION_LABEL, false)
            .map_err(UiError::Confirmation)?;

        if !confirmed {
            return Err(UiError::Stopped);
        }

        Ok(())
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            self.logger
                .error(LOG_TAG, format_args!("UI.Flush failed (stream='out'): {e}"));
        }
        if let Err(e) = self.err.flush() {
            self.logger
                .error(LOG_TAG, format_args!("UI.Flush failed (stream='err'): {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        errors: Rc<RefCell<Vec<String>>>,
        debugs: Rc<RefCell<Vec<String>>>,
    }

    impl ExternalLogger for Recorder {
        fn error(&self, tag: &str, args: fmt::Arguments<'_>) {
            self.errors.borrow_mut().push(format!("{tag}: {args}"));
        }

        fn debug(&self, tag: &str, args: fmt::Arguments<'_>) {
            self.debugs.borrow_mut().push(format!("{tag}: {args}"));
        }
    }

    /// Answers every prompt the same way.
    struct Agreeable;

    impl PromptEngine for Agreeable {
        fn text(&mut self, _label: &str, default: &str) -> io::Result<String> {
            Ok(default.to_string())
        }

        fn select(&mut self, _label: &str, _items: &[String], default: usize) -> io::Result<usize> {
            Ok(default)
        }

        fn password(&mut self, _label: &str) -> io::Result<String> {
            Ok("pw".to_string())
        }

        fn confirm(&mut self, _label: &str, _default: bool) -> io::Result<bool> {
            Ok(true)
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("broken pipe"))
        }
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lines_go_to_the_named_streams() {
        let mut ui = WriterUi::new(Vec::new(), Vec::new(), Recorder::default());

        ui.begin_line(format_args!("step {}...", 1));
        ui.end_line(format_args!(" done"));
        ui.print_line(format_args!("x={}", 5));
        ui.error_line(format_args!("oops: {}", "bad"));

        let (out, err) = ui.into_inner();
        assert_eq!(text(out), "step 1... done\nx=5\n");
        assert_eq!(text(err), "oops: bad\n");
    }

    #[test]
    fn blocks_are_written_verbatim_to_normal_stream() {
        let mut ui = WriterUi::new(Vec::new(), Vec::new(), Recorder::default());

        ui.print_block(b"raw\x00bytes");
        ui.print_error_block("not stderr");

        let (out, err) = ui.into_inner();
        assert_eq!(out, b"raw\x00bytesnot stderr".to_vec());
        assert!(err.is_empty());
    }

    #[test]
    fn write_failures_are_logged_with_message_and_cause() {
        let logger = Recorder::default();
        let mut ui = WriterUi::new(Broken, Broken, logger.clone());

        ui.print_line(format_args!("x={}", 5));
        ui.error_line(format_args!("bad"));
        ui.begin_line(format_args!("start {}", 1));
        ui.end_line(format_args!("end"));
        ui.print_block(b"blk");
        ui.print_error_block("eblk");

        let entries = logger.errors.borrow();
        assert_eq!(
            *entries,
            vec![
                "ui: UI.PrintLinef failed (message='x=5'): broken pipe".to_string(),
                "ui: UI.ErrorLinef failed (message='bad'): broken pipe".to_string(),
                "ui: UI.BeginLinef failed (message='start 1'): broken pipe".to_string(),
                "ui: UI.EndLinef failed (message='end'): broken pipe".to_string(),
                "ui: UI.PrintBlock failed (message='blk'): broken pipe".to_string(),
                "ui: UI.PrintErrorBlock failed (message='eblk'): broken pipe".to_string(),
            ]
        );
    }

    #[test]
    fn table_failure_is_logged() {
        let logger = Recorder::default();
        let mut ui = WriterUi::new(Broken, Vec::new(), logger.clone());

        ui.print_table(&Table::new(["a"]));

        assert_eq!(
            *logger.errors.borrow(),
            vec!["ui: UI.PrintTable failed: broken pipe".to_string()]
        );
    }

    #[test]
    fn flush_failures_are_logged_not_returned() {
        let logger = Recorder::default();
        let mut ui = WriterUi::new(Broken, Broken, logger.clone());

        ui.flush();

        assert_eq!(logger.errors.borrow().len(), 2);
    }

    #[test]
    fn writer_ui_is_always_interactive() {
        let ui = WriterUi::new(Vec::new(), Vec::new(), Recorder::default());
        assert!(ui.is_interactive());
    }

    #[test]
    fn prompt_labels_are_logged_at_debug_level() {
        let logger = Recorder::default();
        let mut ui = WriterUi::new(Vec::new(), Vec::new(), logger.clone())
            .with_prompt_engine(Agreeable);

        ui.ask_for_text(TextOpts::new("Name").with_default("web"))
            .unwrap();
        ui.ask_for_choice(ChoiceOpts::new("Size", ["0", "1"]))
            .unwrap();
        ui.ask_for_password("Token").unwrap();
        ui.ask_for_confirmation().unwrap();

        assert_eq!(
            *logger.debugs.borrow(),
            vec![
                "ui: Asking for text (label='Name')".to_string(),
                "ui: Asking for choice (label='Size')".to_string(),
                "ui: Asking for password (label='Token')".to_string(),
                "ui: Asking for confirmation (label='Continue?')".to_string(),
            ]
        );
        assert!(logger.errors.borrow().is_empty());
    }
}
