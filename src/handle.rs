use crate::fan_error::FanLogError;
use crate::fanout::FanoutWriter;
use std::sync::Arc;

/// Allows flushing and tearing down the logger's file destinations.
///
/// Obtain the `LoggerHandle` from [`Logger::start`](struct.Logger.html#method.start)
/// (or [`Logger::build`](struct.Logger.html#method.build)):
///
/// ```rust,no_run
/// let handle = fanlog::Logger::with_str("info")
///     .log_to_file("prog.log")
///     .start()
///     .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e));
///
/// // ...
///
/// handle.close().unwrap();
/// ```
///
/// Call [`close`](struct.LoggerHandle.html#method.close) at the very end of
/// your program. In-flight log calls from other threads are not synchronized
/// against the teardown; stop logging before closing, or accept that a racing
/// line may be dropped from the files.
#[derive(Clone)]
pub struct LoggerHandle {
    writer: Arc<FanoutWriter>,
}

impl LoggerHandle {
    pub(crate) fn new(writer: Arc<FanoutWriter>) -> Self {
        Self { writer }
    }

    /// Flushes all destinations.
    ///
    /// # Errors
    ///
    /// `FanLogError::Io` if a destination fails to flush.
    pub fn flush(&self) -> Result<(), FanLogError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Closes every owned log file; stderr stays open.
    ///
    /// All files are attempted even if an earlier close fails, and the first
    /// error encountered is returned. Calling `close` again afterwards is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// `FanLogError::Io` if a file fails to close.
    pub fn close(&self) -> Result<(), FanLogError> {
        self.writer.close_all()?;
        Ok(())
    }
}
