//! No-op sink implementation

use super::traits::Sink;

/// A sink that does nothing
///
/// Useful when warnings about unknown levels should be silenced.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn log(&self, _tokens: &[String]) {}
    fn error(&self, _tokens: &[String]) {}
    fn warn(&self, _tokens: &[String]) {}
    fn info(&self, _tokens: &[String]) {}
    fn debug(&self, _tokens: &[String]) {}
}
