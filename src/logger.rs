use crate::fan_error::FanLogError;
use crate::fan_logger::FanLogger;
use crate::fanout::FanoutWriter;
use crate::formats::text_format;
use crate::handle::LoggerHandle;
use crate::level::{level_from_env, parse_level_filter};
use crate::writers::{FileWriter, LogWriter};
use crate::FormatFunction;
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Arc;

/// The entry-point for using `fanlog`.
///
/// A simple example with file logging might look like this:
///
/// ```rust,no_run
/// use fanlog::Logger;
///
/// Logger::with_str("info")
///         .log_to_files(vec!["a.log", "b.log"])
///         .start()
///         .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e));
/// ```
///
/// `Logger` is a builder class that allows you to
/// * specify the desired severity threshold
///   * either programmatically
///     ([`Logger::with()`](struct.Logger.html#method.with)),
///   * or as a String
///     ([`Logger::with_str()`](struct.Logger.html#method.with_str)),
///   * or from the environment variable `RUST_LOG`
///     ([`Logger::with_env()`](struct.Logger.html#method.with_env)),
///   * or by combining both options
///     ([`Logger::with_env_or_str()`](struct.Logger.html#method.with_env_or_str)),
/// * choose the line format and the file destinations,
/// * and finally obtain the configured logger
///
///   * installed process-wide, with [`start()`](struct.Logger.html#method.start),
///   * or as an explicit instance, with [`build()`](struct.Logger.html#method.build).
pub struct Logger {
    threshold: LevelFilter,
    parse_err: Option<String>,
    format: FormatFunction,
    paths: Vec<PathBuf>,
}

/// Create a Logger instance and define the severity threshold.
impl Logger {
    /// Creates a Logger with the given severity threshold.
    /// By default, lines are rendered with `text_format` and written to
    /// stderr only.
    #[must_use]
    pub fn with(threshold: LevelFilter) -> Self {
        Self::from_threshold_and_errs(threshold, None)
    }

    /// Creates a Logger whose threshold is parsed from a String;
    /// allowed values are `debug`, `info`, `warn`, `warning`, and `error`.
    ///
    /// If parsing fails, the default threshold `info` is retained and the
    /// error is kept for [`check_parse_error`](struct.Logger.html#method.check_parse_error).
    #[must_use]
    pub fn with_str<S: AsRef<str>>(s: S) -> Self {
        Self::from_result(parse_level_filter(s))
    }

    /// Creates a Logger whose threshold is read from the environment variable
    /// `RUST_LOG`; if the variable is not set, the default threshold `info`
    /// is used.
    #[must_use]
    pub fn with_env() -> Self {
        match level_from_env() {
            Ok(Some(threshold)) => Self::from_threshold_and_errs(threshold, None),
            Ok(None) => Self::from_threshold_and_errs(LevelFilter::Info, None),
            Err(e) => Self::from_threshold_and_errs(LevelFilter::Info, Some(e.to_string())),
        }
    }

    /// Creates a Logger whose threshold is read from the environment variable
    /// `RUST_LOG`, or parsed from the given String if `RUST_LOG` is not set.
    #[must_use]
    pub fn with_env_or_str<S: AsRef<str>>(s: S) -> Self {
        match level_from_env() {
            Ok(Some(threshold)) => Self::from_threshold_and_errs(threshold, None),
            Ok(None) => Self::from_result(parse_level_filter(s)),
            Err(e) => Self::from_threshold_and_errs(LevelFilter::Info, Some(e.to_string())),
        }
    }

    fn from_result(result: Result<LevelFilter, FanLogError>) -> Self {
        match result {
            Ok(threshold) => Self::from_threshold_and_errs(threshold, None),
            Err(e) => Self::from_threshold_and_errs(LevelFilter::Info, Some(e.to_string())),
        }
    }

    fn from_threshold_and_errs(threshold: LevelFilter, parse_err: Option<String>) -> Self {
        Self {
            threshold,
            parse_err,
            format: text_format,
            paths: Vec::new(),
        }
    }
}

/// Simple methods for influencing the behavior of the Logger.
impl Logger {
    /// Allows verifying that no parse error has occurred in the used factory
    /// method, and examining the error.
    ///
    /// The factory methods that parse a severity string
    /// (`Logger::with_str()` etc.) fall back to the default threshold `info`
    /// if parsing fails. This method gives programmatic access to the parse
    /// error, if there was one, so that bad input does not go unnoticed.
    ///
    /// # Errors
    ///
    /// `FanLogError::LevelFilter` if the severity input was malformed.
    pub fn check_parse_error(self) -> Result<Self, FanLogError> {
        match self.parse_err {
            Some(parse_err) => Err(FanLogError::LevelFilter(parse_err)),
            None => Ok(self),
        }
    }

    /// Makes the logger use the provided format function for all destinations.
    ///
    /// You can either choose one of the provided formatters
    /// ([`text_format`](fn.text_format.html), the default, or
    /// [`json_format`](fn.json_format.html)),
    /// or you create and use your own format function with the signature <br>
    /// ```rust,ignore
    /// fn(
    ///    write: &mut dyn std::io::Write,
    ///    now: &mut DeferredNow,
    ///    record: &Record,
    /// ) -> Result<(), std::io::Error>
    /// ```
    #[must_use]
    pub fn format(mut self, format: FormatFunction) -> Self {
        self.format = format;
        self
    }

    /// Adds one file destination.
    ///
    /// The file is opened during `start()`/`build()`: created if absent,
    /// appended to if present, with permissions restricted to the owner.
    #[must_use]
    pub fn log_to_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Adds a sequence of file destinations, in order.
    ///
    /// stderr is implicit and always remains the first destination; the files
    /// follow in the given order.
    #[must_use]
    pub fn log_to_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }
}

/// Finally, start logging.
impl Logger {
    /// Consumes the Logger object and installs the configured logger as the
    /// process-wide default for the `log` macros.
    ///
    /// The returned handle is used to close the log files at shutdown; see
    /// [`LoggerHandle`](struct.LoggerHandle.html).
    ///
    /// # Errors
    ///
    /// `FanLogError::OpenFile` if a file destination cannot be opened
    /// (all files opened before the failure are closed again), or
    /// `FanLogError::Log` if a global logger was already installed.
    pub fn start(self) -> Result<LoggerHandle, FanLogError> {
        let max_level = self.threshold;
        let (boxed_logger, handle) = self.build()?;
        log::set_boxed_logger(boxed_logger)?;
        log::set_max_level(max_level);
        Ok(handle)
    }

    /// Builds a boxed logger and a `LoggerHandle` for it, but does not touch
    /// the global logger.
    ///
    /// Use this if you want to pass the logger around explicitly, or nest it
    /// within another `log::Log` implementation. Note that when installing
    /// the result manually via `log::set_boxed_logger`, the global max level
    /// (`log::set_max_level`) must be raised as well.
    ///
    /// # Errors
    ///
    /// `FanLogError::OpenFile` if a file destination cannot be opened;
    /// all files opened earlier in this call are closed again, so a failed
    /// setup leaves nothing behind.
    pub fn build(self) -> Result<(Box<dyn log::Log>, LoggerHandle), FanLogError> {
        let mut files: Vec<Box<dyn LogWriter>> = Vec::with_capacity(self.paths.len());
        for path in self.paths {
            match FileWriter::open(path) {
                Ok(writer) => files.push(Box::new(writer)),
                Err(e) => {
                    // roll back: close what was opened so far, suppressing
                    // secondary errors in favor of the open error
                    for writer in &files {
                        writer.close().ok();
                    }
                    return Err(e);
                }
            }
        }

        let writer = Arc::new(FanoutWriter::new(self.format, files));
        let logger = FanLogger::new(self.threshold, Arc::clone(&writer));
        let handle = LoggerHandle::new(writer);
        Ok((Box::new(logger), handle))
    }
}
