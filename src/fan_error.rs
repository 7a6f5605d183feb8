use std::path::PathBuf;
use thiserror::Error;

/// Describes errors in the initialization and teardown of `fanlog`.
#[derive(Error, Debug)]
pub enum FanLogError {
    /// A log file could not be created or opened for appending.
    #[error("failed to open log file {path}")]
    OpenFile {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying cause.
        source: std::io::Error,
    },

    /// Log cannot be written or a log file cannot be closed.
    #[error("log output failed")]
    Io(#[from] std::io::Error),

    /// Invalid severity string; allowed are debug, info, warn, warning, error.
    #[error("unknown log level {0}")]
    LevelFilter(String),

    /// Logger installation failed; there is already a global logger.
    #[error("logger initialization failed")]
    Log(#[from] log::SetLoggerError),
}
