//! XLog Core
//!
//! Leveled, tagged console logging.
//! This crate provides the core functionality that can be used from any environment
//! (Node.js via napi-rs, native CLI, etc.)
//!
//! ## Levels
//!
//! | id | name    | channel |
//! |----|---------|---------|
//! | m  | message | log     |
//! | e  | error   | error   |
//! | w  | warning | warn    |
//! | i  | info    | info    |
//! | d  | debug   | debug   |
//! | v  | verbose | debug   |
//!
//! A logger shows a message when `rank(level) <= rank(threshold)`, with ranks
//! counted from 0 down this table (`m` is always shown, `v` only at threshold `v`).
//!
//! ```rust
//! use xlog_core::{XLog, LogOptions};
//!
//! let xlog = XLog::new();
//! let net = xlog.get_logger("net");
//! net.set_level('i').unwrap();
//!
//! net.i(&[&"connected", &"10.0.0.1"]);
//! net.e_with(&[&"handshake failed"], LogOptions::with_stack());
//!
//! // Tag-per-call shape
//! xlog.w("db", &[&"slow query"]);
//! ```

pub mod levels;
pub mod sink;
pub mod context;
pub mod logger;
pub mod registry;
pub mod config;
pub mod tag;
mod error;

// Re-export commonly used types
pub use levels::{Level, LevelRegistry, SinkKind, DEFAULT_LEVEL, FALLBACK_LEVEL};

pub use sink::{Sink, SinkExt, SharedSink, ConsoleSink, NoOpSink, MemorySink, SinkCall};

pub use context::{
    LogContext,
    Clock, SystemClock, FixedClock,
    StackCapture, BacktraceCapture, FixedStack,
};

pub use logger::{XLogger, FormatOptions, LogOptions};

pub use registry::{XLog, global, get_logger};

pub use config::{XLogConfig, FileConfigLoader, ConfigError, ConfigResult};

pub use error::{XLogError, XLogResult};
