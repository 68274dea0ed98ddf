// Runtime configuration: which UI to build and how chatty logging is.
// Values come from the environment; the binary overlays its CLI flags.

use crate::logging::LogLogger;
use crate::non_interactive::NonInteractiveUi;
use crate::ui::Ui;
use crate::writer::WriterUi;

pub const NON_INTERACTIVE_VAR: &str = "CLI_UI_NON_INTERACTIVE";
pub const DEBUG_VAR: &str = "CLI_UI_DEBUG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiConfig {
    pub non_interactive: bool,
    pub debug: bool,
}

impl UiConfig {
    /// Read `CLI_UI_NON_INTERACTIVE` and `CLI_UI_DEBUG`. Unset or
    /// unrecognised values count as false.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |name: &str| lookup(name).is_some_and(|v| is_truthy(&v));
        Self {
            non_interactive: flag(NON_INTERACTIVE_VAR),
            debug: flag(DEBUG_VAR),
        }
    }

    /// Console UI for this configuration, wrapped for unattended runs when
    /// `non_interactive` is set.
    pub fn build_ui(&self) -> Box<dyn Ui> {
        let console = WriterUi::console(LogLogger);
        if self.non_interactive {
            Box::new(NonInteractiveUi::new(console))
        } else {
            Box::new(console)
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
