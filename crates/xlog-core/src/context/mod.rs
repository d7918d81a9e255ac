//! External collaborators a logger talks to
//!
//! A [`LogContext`] bundles the output sink, the warning sink, the clock
//! and the stack capture. Every logger created by one registry shares the
//! same context.

mod clock;
mod stack;

use std::sync::Arc;

pub use clock::{Clock, SharedClock, SystemClock, FixedClock, format_timestamp, TIMESTAMP_FORMAT};
pub use stack::{StackCapture, SharedStackCapture, BacktraceCapture, FixedStack};

use crate::sink::{ConsoleSink, SharedSink};

/// Collaborator bundle handed to loggers
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use xlog_core::context::LogContext;
/// use xlog_core::sink::MemorySink;
///
/// let sink = Arc::new(MemorySink::new());
/// let context = LogContext::default()
///     .with_sink(sink.clone())
///     .with_warnings(sink);
/// ```
#[derive(Clone)]
pub struct LogContext {
    /// Receives emitted messages and `raw` output
    pub sink: SharedSink,
    /// Receives warnings about unknown levels
    pub warnings: SharedSink,
    pub clock: SharedClock,
    pub stack: SharedStackCapture,
}

impl LogContext {
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_warnings(mut self, warnings: SharedSink) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_stack(mut self, stack: SharedStackCapture) -> Self {
        self.stack = stack;
        self
    }
}

impl Default for LogContext {
    fn default() -> Self {
        let console: SharedSink = Arc::new(ConsoleSink::new());
        Self {
            sink: console.clone(),
            warnings: console,
            clock: Arc::new(SystemClock),
            stack: Arc::new(BacktraceCapture),
        }
    }
}

impl std::fmt::Debug for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogContext").finish_non_exhaustive()
    }
}
