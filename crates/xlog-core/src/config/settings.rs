//! Registry settings and environment overrides

use std::collections::HashMap;

use crate::levels::{LevelRegistry, SinkKind, DEFAULT_LEVEL};
use crate::logger::FormatOptions;
use super::error::{ConfigError, ConfigResult};

/// Environment variable overriding the default level (id or name)
pub const LEVEL_ENV: &str = "XLOG_LEVEL";

/// Environment variable forcing stack traces on every message (`1`/`true`)
pub const STACK_ENV: &str = "XLOG_STACK";

/// Validated settings used to build an [`XLog`](crate::XLog)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XLogConfig {
    /// Default threshold for new loggers
    pub level: char,
    /// Formatting for new loggers
    pub format: FormatOptions,
    /// Per-level channel overrides
    pub sinks: HashMap<char, SinkKind>,
}

impl Default for XLogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            format: FormatOptions::default(),
            sinks: HashMap::new(),
        }
    }
}

impl XLogConfig {
    /// Apply `XLOG_LEVEL` and `XLOG_STACK` from the process environment
    pub fn apply_env(self) -> ConfigResult<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.override_level(&lookup)?;
        self.override_stack(&lookup)?;
        Ok(self)
    }

    /// Apply overrides one by one, handing each bad value to `report`
    ///
    /// A rejected variable leaves its setting untouched; the others still apply.
    pub fn apply_overrides_lossy<F, R>(mut self, lookup: F, mut report: R) -> Self
    where
        F: Fn(&str) -> Option<String>,
        R: FnMut(ConfigError),
    {
        if let Err(err) = self.override_level(&lookup) {
            report(err);
        }
        if let Err(err) = self.override_stack(&lookup) {
            report(err);
        }
        self
    }

    fn override_level<F>(&mut self, lookup: &F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(LEVEL_ENV) {
            self.level = LevelRegistry::standard()
                .resolve(&value)
                .ok_or(ConfigError::UnknownLevel(value))?;
        }
        Ok(())
    }

    fn override_stack<F>(&mut self, lookup: &F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(STACK_ENV) {
            self.format.print_stack = match value.to_lowercase().as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                other => {
                    return Err(ConfigError::Other(format!(
                        "{} must be true or false, got '{}'",
                        STACK_ENV, other
                    )))
                }
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = XLogConfig::default();
        assert_eq!(config.level, 'w');
        assert_eq!(config.format, FormatOptions::default());
        assert!(config.sinks.is_empty());
    }

    #[test]
    fn test_no_overrides() {
        let config = XLogConfig::default().apply_overrides(env(&[])).unwrap();
        assert_eq!(config, XLogConfig::default());
    }

    #[test]
    fn test_level_override_by_id_and_name() {
        let config = XLogConfig::default().apply_overrides(env(&[(LEVEL_ENV, "i")])).unwrap();
        assert_eq!(config.level, 'i');

        let config = XLogConfig::default().apply_overrides(env(&[(LEVEL_ENV, "VERBOSE")])).unwrap();
        assert_eq!(config.level, 'v');
    }

    #[test]
    fn test_invalid_level_override() {
        let result = XLogConfig::default().apply_overrides(env(&[(LEVEL_ENV, "trace")]));
        assert!(matches!(result, Err(ConfigError::UnknownLevel(v)) if v == "trace"));
    }

    #[test]
    fn test_stack_override() {
        let config = XLogConfig::default().apply_overrides(env(&[(STACK_ENV, "TRUE")])).unwrap();
        assert!(config.format.print_stack);

        let result = XLogConfig::default().apply_overrides(env(&[(STACK_ENV, "maybe")]));
        assert!(matches!(result, Err(ConfigError::Other(_))));
    }

    #[test]
    fn test_lossy_overrides_keep_valid_values() {
        let mut errors = Vec::new();
        let config = XLogConfig::default().apply_overrides_lossy(
            env(&[(LEVEL_ENV, "trace"), (STACK_ENV, "1")]),
            |err| errors.push(err),
        );

        assert_eq!(config.level, 'w');
        assert!(config.format.print_stack);
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ConfigError::UnknownLevel(v) if v == "trace"));
    }
}
