use crate::fan_error::FanLogError;
use crate::writers::LogWriter;
use std::fs::{File, OpenOptions};
use std::io::{Error as IoError, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A `LogWriter` implementation that appends to a single file.
///
/// The file is created if it does not exist, opened in append mode otherwise,
/// and (on unix) carries permission bits `0o600` so that only the owner can
/// read it.
///
/// The writer needs internal mutability because `LogWriter::write()` takes an
/// unmutable self; the `Mutex` also serializes writes against `close()`.
pub struct FileWriter {
    // None once closed; a second close is then a no-op
    file: Mutex<Option<File>>,
    path: PathBuf,
}

impl FileWriter {
    /// Opens the file at `path` for appending, creating it if absent.
    ///
    /// # Errors
    ///
    /// `FanLogError::OpenFile` with the path and the underlying cause.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, FanLogError> {
        let path = path.into();
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let file = options.open(&path).map_err(|source| FanLogError::OpenFile {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            file: Mutex::new(Some(file)),
            path,
        })
    }

    /// The path this writer appends to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> std::io::Result<std::sync::MutexGuard<'_, Option<File>>> {
        self.file
            .lock()
            .map_err(|_| IoError::new(ErrorKind::Other, "file writer mutex poisoned"))
    }
}

impl LogWriter for FileWriter {
    fn write(&self, buf: &[u8]) -> std::io::Result<()> {
        match self.lock()?.as_mut() {
            Some(file) => file.write_all(buf),
            // a write racing a shutdown is dropped, the caller accepted
            // best-effort teardown
            None => Ok(()),
        }
    }

    fn flush(&self) -> std::io::Result<()> {
        match self.lock()?.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }

    fn close(&self) -> std::io::Result<()> {
        match self.lock()?.take() {
            // sync before dropping the descriptor so that close failures
            // surface here instead of being swallowed by Drop
            Some(file) => file.sync_all(),
            None => Ok(()),
        }
    }
}
