//! Logger setup.
//!
//! The TUI owns stdout and the alternate screen, so logs go to a file when
//! `logging.file` is configured. Otherwise they go to stderr.

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::LoggingSettings;

const ENV_LOG: &str = "MUSICSTREAM_LOG";
const ENV_LOG_STYLE: &str = "MUSICSTREAM_LOG_STYLE";

/// Install the global logger. Safe to call more than once; later calls are ignored.
pub fn init(settings: &LoggingSettings) {
    let mut builder = Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, settings.level.as_str())
            .write_style(ENV_LOG_STYLE),
    );

    if let Some(path) = &settings.file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!(
                    "musicstream: cannot open log file {}: {e}",
                    path.display()
                );
            }
        }
    }

    let _ = builder.try_init();
}
