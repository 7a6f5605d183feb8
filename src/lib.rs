#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::unused_self)]
#![allow(clippy::needless_doctest_main)]

//! A small logger that plugs into the [`log`](https://crates.io/crates/log) facade
//! and fans every log line out to stderr plus a set of append-mode files.
//!
//! To log to stderr only, start `fanlog` e.g. like this:
//! ```rust
//! fanlog::Logger::with_str("info").start().unwrap();
//! ```
//!
//! Adding files duplicates every accepted record to each of them:
//! ```rust,no_run
//! let handle = fanlog::Logger::with_str("info")
//!     .log_to_files(vec!["all.log", "audit.log"])
//!     .start()
//!     .unwrap();
//!
//! log::info!("written to stderr, all.log, and audit.log");
//!
//! handle.close().unwrap();
//! ```
//!
//! Properties:
//!
//! * stderr is always the first destination and is never closed,
//! * the files are opened in append mode, created if absent, with permissions
//!   restricted to the owner,
//! * every destination receives byte-identical content, in identical order,
//! * records below the severity threshold are discarded before any formatting,
//! * the returned [`LoggerHandle`](struct.LoggerHandle.html) closes all owned
//!   files; calling [`close`](struct.LoggerHandle.html#method.close) again is
//!   a no-op.
//!
//! The line format is chosen with [`Logger::format`](struct.Logger.html#method.format);
//! [`text_format`](fn.text_format.html) (the default) and
//! [`json_format`](fn.json_format.html) are provided.
//!
//! There is no rotation, no retention, no buffering across records, and no
//! remote shipping; every write is synchronous.

mod deferred_now;
mod fan_error;
mod fan_logger;
mod fanout;
mod formats;
mod handle;
mod level;
mod logger;

pub mod writers;

/// Re-exports from log crate
pub use log::{Level, LevelFilter, Record};

pub use crate::deferred_now::DeferredNow;
pub use crate::fan_error::FanLogError;
pub use crate::formats::{json_format, text_format, FormatFunction};
pub use crate::handle::LoggerHandle;
pub use crate::level::{level_from_env, parse_level_filter};
pub use crate::logger::Logger;
