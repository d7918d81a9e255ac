//! Sink trait definition

use std::sync::Arc;

use crate::levels::SinkKind;

/// Output channel abstraction
///
/// A sink receives already-formatted tokens, one call per emitted message,
/// and is responsible for display. Nothing is returned to the logger.
///
/// Implementations:
/// - `ConsoleSink`: stdout/stderr
/// - `NoOpSink`: discards everything
/// - `MemorySink`: records calls for inspection
pub trait Sink: Send + Sync {
    /// Plain log channel (also used by `raw`)
    fn log(&self, tokens: &[String]);

    fn error(&self, tokens: &[String]);

    fn warn(&self, tokens: &[String]);

    fn info(&self, tokens: &[String]);

    fn debug(&self, tokens: &[String]);

    /// Dispatch to the channel selected by `kind`
    fn emit(&self, kind: SinkKind, tokens: &[String]) {
        match kind {
            SinkKind::Log => self.log(tokens),
            SinkKind::Error => self.error(tokens),
            SinkKind::Warn => self.warn(tokens),
            SinkKind::Info => self.info(tokens),
            SinkKind::Debug => self.debug(tokens),
        }
    }
}

/// Type alias for a boxed sink
pub type BoxedSink = Box<dyn Sink>;

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;

/// Extension trait for single-message output with format arguments
pub trait SinkExt: Sink {
    /// Write one formatted message on the warn channel
    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&[args.to_string()]);
    }

    /// Write one formatted message on the log channel
    fn log_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.log(&[args.to_string()]);
    }
}

// Implement SinkExt for all Sink implementations
impl<T: Sink + ?Sized> SinkExt for T {}
