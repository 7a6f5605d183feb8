/// A single log destination.
///
/// The fan-out delivers every formatted log line, as bytes, to each of its
/// destinations in order; implementations must write the buffer in one piece
/// so that concurrent callers never interleave partial lines.
pub trait LogWriter: Sync + Send {
    /// Writes out one complete, newline-terminated log line.
    ///
    /// # Errors
    ///
    /// `std::io::Error`
    fn write(&self, buf: &[u8]) -> std::io::Result<()>;

    /// Flushes any buffered bytes.
    ///
    /// # Errors
    ///
    /// `std::io::Error`
    fn flush(&self) -> std::io::Result<()>;

    /// Releases the underlying resource, if the destination owns one.
    ///
    /// The default implementation does nothing; destinations that are not
    /// closable resources need not override it. Implementations must be
    /// idempotent.
    ///
    /// # Errors
    ///
    /// `std::io::Error`
    fn close(&self) -> std::io::Result<()> {
        Ok(())
    }
}
