//! Call-stack capture

use std::backtrace::Backtrace;
use std::sync::Arc;

/// Supplies a textual call stack on demand
pub trait StackCapture: Send + Sync {
    fn capture(&self) -> String;
}

/// Type alias for an Arc-wrapped stack capture
pub type SharedStackCapture = Arc<dyn StackCapture>;

/// Captures the real call stack with `std::backtrace`
///
/// Capture is forced, independent of `RUST_BACKTRACE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceCapture;

impl StackCapture for BacktraceCapture {
    fn capture(&self) -> String {
        Backtrace::force_capture().to_string()
    }
}

/// Returns the same text every time
#[derive(Debug, Clone)]
pub struct FixedStack(pub String);

impl FixedStack {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl StackCapture for FixedStack {
    fn capture(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_stack() {
        let stack = FixedStack::new("at main");
        assert_eq!(stack.capture(), "at main");
    }

    #[test]
    fn test_backtrace_capture() {
        // Content is platform dependent; only check that it does not panic
        let _ = BacktraceCapture.capture();
    }
}
