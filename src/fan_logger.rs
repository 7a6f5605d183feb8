use crate::fanout::FanoutWriter;
use crate::DeferredNow;
use log::LevelFilter;
use std::sync::Arc;

// Implements log::Log to plug into the log crate.
//
// Gates records against the severity threshold before any formatting work,
// then delegates the real writing to the FanoutWriter. log::Log::log cannot
// return an error, so a failed write is reported once to stderr, bypassing
// the logger to avoid recursion.
pub(crate) struct FanLogger {
    threshold: LevelFilter,
    writer: Arc<FanoutWriter>,
}

impl FanLogger {
    pub fn new(threshold: LevelFilter, writer: Arc<FanoutWriter>) -> Self {
        Self { threshold, writer }
    }
}

impl log::Log for FanLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.threshold
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut now = DeferredNow::new();
        self.writer.write(&mut now, record).unwrap_or_else(|e| {
            eprintln!("[fanlog] writing log line failed with {}", e);
        });
    }

    fn flush(&self) {
        self.writer.flush().unwrap_or_else(|e| {
            eprintln!("[fanlog] flushing failed with {}", e);
        });
    }
}
