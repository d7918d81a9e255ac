//! Configuration for logger registries
//!
//! Sources, lowest precedence first:
//! - built-in defaults (`XLogConfig::default()`)
//! - a YAML or JSON file (`FileConfigLoader`)
//! - environment variables (`XLOG_LEVEL`, `XLOG_STACK`)

mod error;
mod settings;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use settings::{XLogConfig, LEVEL_ENV, STACK_ENV};
pub use file::{FileConfigLoader, ConfigFile};
