// Logging: the sink for output failures the UI swallows, and the
// `env_logger` setup the binary runs at startup.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use env_logger::Target;
use log::LevelFilter;

const DATA_DIR_NAME: &str = "cli-ui";

/// Sink for problems the UI cannot report to its caller, such as a failed
/// write to stdout. Messages are grouped by a short tag.
pub trait ExternalLogger {
    fn error(&self, tag: &str, args: fmt::Arguments<'_>);

    fn debug(&self, tag: &str, args: fmt::Arguments<'_>);
}

/// Forwards to the `log` facade, using the tag as the log target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLogger;

impl ExternalLogger for LogLogger {
    fn error(&self, tag: &str, args: fmt::Arguments<'_>) {
        log::error!(target: tag, "{args}");
    }

    fn debug(&self, tag: &str, args: fmt::Arguments<'_>) {
        log::debug!(target: tag, "{args}");
    }
}

#[derive(Default)]
pub struct Logging {
    file_name: Option<PathBuf>,
    debug_mode: bool,
}

impl Logging {
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_name: None,
            debug_mode: false,
        }
    }

    /// Send log records to `file_name` under the local data directory
    /// instead of stderr.
    #[must_use]
    pub fn with_file<P>(mut self, file_name: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn with_debug_mode(mut self, enable: bool) -> Self {
        self.debug_mode = enable;
        self
    }

    pub fn start(&self) -> Result<()> {
        let mut b = env_logger::builder();

        if self.debug_mode {
            b.filter_level(LevelFilter::Debug);
        } else {
            b.filter_level(LevelFilter::Info);
        }

        if let Some(file_name) = &self.file_name {
            let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            let log_file = log_file_path(&data_dir, file_name);

            if let Some(parent) = log_file.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Unable to create log directory {}", parent.display())
                })?;
            }

            let fd = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .with_context(|| format!("Unable to open {} for writing", log_file.display()))?;

            b.target(Target::Pipe(Box::new(fd)));
        }

        b.try_init().context("Logger already initialized")?;

        Ok(())
    }
}

/// Absolute file names are used as given; relative ones land in this
/// tool's folder under `data_dir`.
fn log_file_path(data_dir: &Path, file_name: &Path) -> PathBuf {
    if file_name.is_absolute() {
        file_name.to_path_buf()
    } else {
        data_dir.join(DATA_DIR_NAME).join(file_name)
    }
}
