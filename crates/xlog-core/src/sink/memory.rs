//! Recording sink

use parking_lot::Mutex;

use crate::levels::SinkKind;
use super::traits::Sink;

/// One recorded sink call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkCall {
    pub kind: SinkKind,
    pub tokens: Vec<String>,
}

/// In-memory sink that records every call
///
/// Useful for testing and for embedders that forward messages elsewhere.
///
/// # Example
///
/// ```
/// use xlog_core::sink::{MemorySink, Sink};
/// use xlog_core::levels::SinkKind;
///
/// let sink = MemorySink::new();
/// sink.warn(&["careful".to_string()]);
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.calls()[0].kind, SinkKind::Warn);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    calls: Mutex<Vec<SinkCall>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all calls so far
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().clone()
    }

    /// Calls made on one channel
    pub fn calls_on(&self, kind: SinkKind) -> Vec<SinkCall> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect()
    }

    /// Tokens of the most recent call
    pub fn last(&self) -> Option<Vec<String>> {
        self.calls.lock().last().map(|c| c.tokens.clone())
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, kind: SinkKind, tokens: &[String]) {
        self.calls.lock().push(SinkCall {
            kind,
            tokens: tokens.to_vec(),
        });
    }
}

impl Sink for MemorySink {
    fn log(&self, tokens: &[String]) {
        self.record(SinkKind::Log, tokens);
    }

    fn error(&self, tokens: &[String]) {
        self.record(SinkKind::Error, tokens);
    }

    fn warn(&self, tokens: &[String]) {
        self.record(SinkKind::Warn, tokens);
    }

    fn info(&self, tokens: &[String]) {
        self.record(SinkKind::Info, tokens);
    }

    fn debug(&self, tokens: &[String]) {
        self.record(SinkKind::Debug, tokens);
    }
}
