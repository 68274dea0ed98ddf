// Library root
// ------------
// Console user interface for command-line tools: line, block and table
// output plus text, choice, password and confirmation prompts.
//
// Module responsibilities:
// - `ui`: the `Ui` trait every front end implements, and prompt options.
// - `writer`: `WriterUi`, backed by real streams and a terminal prompt
//   engine.
// - `non_interactive`: `NonInteractiveUi`, which wraps another UI and
//   answers prompts from their defaults.
// - `prompt`: the prompt engine seam and its `dialoguer` implementation.
// - `table`: tabular output rendered with `tabled`.
// - `logging`: where swallowed output failures are reported, and logger
//   setup.
// - `config`: environment-driven choice between the two UIs.
pub mod config;
pub mod error;
pub mod logging;
pub mod non_interactive;
pub mod prompt;
pub mod table;
pub mod ui;
pub mod writer;

pub use config::UiConfig;
pub use error::{Result, UiError};
pub use logging::{ExternalLogger, LogLogger};
pub use non_interactive::NonInteractiveUi;
pub use prompt::{DialoguerPrompter, PromptEngine};
pub use table::Table;
pub use ui::{ChoiceOpts, TextOpts, Ui, Validator};
pub use writer::WriterUi;
