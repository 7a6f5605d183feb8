//! Contains a trait ([`LogWriter`](trait.LogWriter.html)) describing a single
//! log destination, and the concrete implementation for writing to files
//! ([`FileWriter`](struct.FileWriter.html)).
//!
//! A destination is required to accept byte writes; being closable is
//! optional. stderr, the always-present first destination of the fan-out, is
//! handled inside the crate and is never closed; files are closed through the
//! [`LoggerHandle`](../struct.LoggerHandle.html) returned by
//! [`Logger::start`](../struct.Logger.html#method.start).

mod file_writer;
mod log_writer;

pub use self::file_writer::FileWriter;
pub use self::log_writer::LogWriter;
