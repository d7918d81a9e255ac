//! Severity levels and their output routing

mod level;
mod registry;

pub use level::{Level, SinkKind};
pub use registry::{LevelRegistry, DEFAULT_LEVEL, FALLBACK_LEVEL};
