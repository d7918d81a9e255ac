//! Output sinks that receive formatted messages

mod traits;
mod noop;
mod console;
mod memory;

pub use traits::{Sink, SinkExt, BoxedSink, SharedSink};
pub use noop::NoOpSink;
pub use console::ConsoleSink;
pub use memory::{MemorySink, SinkCall};
