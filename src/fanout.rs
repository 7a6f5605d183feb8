use crate::writers::LogWriter;
use crate::{DeferredNow, FormatFunction};
use log::Record;
use std::cell::RefCell;
use std::io::Write;
use std::sync::Mutex;

// Duplicates every log line to stderr and to each owned file, in that order.
//
// stderr is an implicit member: it is always first and is never closed.
// The record is formatted exactly once, so all destinations receive
// byte-identical content; the write lock keeps the delivery order identical
// across destinations even under concurrent logging.
pub(crate) struct FanoutWriter {
    format: FormatFunction,
    write_lock: Mutex<()>,
    files: Vec<Box<dyn LogWriter>>,
}

impl FanoutWriter {
    pub fn new(format: FormatFunction, files: Vec<Box<dyn LogWriter>>) -> Self {
        Self {
            format,
            write_lock: Mutex::new(()),
            files,
        }
    }

    // Formats and writes out one log line. Fails fast: delivery stops at the
    // first failing destination, and nothing is written if formatting fails.
    pub fn write(&self, now: &mut DeferredNow, record: &Record) -> std::io::Result<()> {
        let mut result: std::io::Result<()> = Ok(());

        buffer_with(|tl_buf| match tl_buf.try_borrow_mut() {
            Ok(mut buffer) => {
                result = match (self.format)(&mut *buffer, now, record) {
                    Ok(()) => {
                        buffer.push(b'\n');
                        self.write_bytes(&buffer)
                    }
                    Err(e) => Err(e),
                };
                buffer.clear();
            }
            Err(_e) => {
                // We arrive here in the rare cases of recursive logging
                // (e.g. log calls in Debug or Display implementations)
                let mut tmp_buf = Vec::<u8>::with_capacity(200);
                result = match (self.format)(&mut tmp_buf, now, record) {
                    Ok(()) => {
                        tmp_buf.push(b'\n');
                        self.write_bytes(&tmp_buf)
                    }
                    Err(e) => Err(e),
                };
            }
        });
        result
    }

    fn write_bytes(&self, buf: &[u8]) -> std::io::Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "fan-out lock poisoned"))?;
        std::io::stderr().write_all(buf)?;
        for writer in &self.files {
            writer.write(buf)?;
        }
        Ok(())
    }

    // Flush any buffered bytes on all destinations.
    pub fn flush(&self) -> std::io::Result<()> {
        for writer in &self.files {
            writer.flush()?;
        }
        std::io::stderr().flush()
    }

    // Closes every owned file, attempting all of them even if one fails,
    // and returns the first error encountered. stderr stays open.
    // Closed members make subsequent closes no-ops, so this is idempotent.
    pub fn close_all(&self) -> std::io::Result<()> {
        let mut first_err = None;
        for writer in &self.files {
            if let Err(e) = writer.close() {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// Use a thread-local buffer for assembling the log line
pub(crate) fn buffer_with<F>(f: F)
where
    F: FnOnce(&RefCell<Vec<u8>>),
{
    thread_local! {
        static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(200));
    }
    BUFFER.with(f);
}

#[cfg(test)]
mod test {
    use super::FanoutWriter;
    use crate::writers::{FileWriter, LogWriter};
    use crate::{text_format, DeferredNow};
    use std::io::{Error as IoError, ErrorKind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FailingCloser {
        name: &'static str,
        close_calls: Arc<AtomicUsize>,
    }
    impl LogWriter for FailingCloser {
        fn write(&self, _buf: &[u8]) -> std::io::Result<()> {
            Ok(())
        }
        fn flush(&self) -> std::io::Result<()> {
            Ok(())
        }
        fn close(&self) -> std::io::Result<()> {
            self.close_calls.fetch_add(1, Ordering::SeqCst);
            Err(IoError::new(ErrorKind::Other, self.name))
        }
    }

    #[test]
    fn close_all_attempts_every_member() {
        let dir = tempfile::tempdir().unwrap();
        let file = FileWriter::open(dir.path().join("t.log")).unwrap();
        let first_calls = Arc::new(AtomicUsize::new(0));
        let last_calls = Arc::new(AtomicUsize::new(0));

        let fanout = FanoutWriter::new(
            text_format,
            vec![
                Box::new(FailingCloser {
                    name: "first close failed",
                    close_calls: Arc::clone(&first_calls),
                }),
                Box::new(file),
                Box::new(FailingCloser {
                    name: "last close failed",
                    close_calls: Arc::clone(&last_calls),
                }),
            ],
        );
        fanout
            .write(
                &mut DeferredNow::new(),
                &log::Record::builder()
                    .args(format_args!("before close"))
                    .level(log::Level::Info)
                    .build(),
            )
            .unwrap();

        // both failing members were attempted, the first error is surfaced,
        // and the file in between was still closed
        let err = fanout.close_all().err().unwrap();
        assert_eq!(err.to_string(), "first close failed");
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(last_calls.load(Ordering::SeqCst), 1);

        let content = std::fs::read_to_string(dir.path().join("t.log")).unwrap();
        assert!(content.contains("before close"));
    }
}
