//! Level and sink channel types

use serde::{Deserialize, Serialize};

/// Output channel a level is routed to
///
/// Mirrors the five console methods (`log`, `error`, `warn`, `info`, `debug`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Log,
    Error,
    Warn,
    Info,
    Debug,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Log => "log",
            SinkKind::Error => "error",
            SinkKind::Warn => "warn",
            SinkKind::Info => "info",
            SinkKind::Debug => "debug",
        }
    }

    /// Parse a channel name (case insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "log" => Some(SinkKind::Log),
            "error" => Some(SinkKind::Error),
            "warn" => Some(SinkKind::Warn),
            "info" => Some(SinkKind::Info),
            "debug" => Some(SinkKind::Debug),
            _ => None,
        }
    }
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A severity level
///
/// Lower rank means more severe. A message is shown when its rank is
/// less than or equal to the logger's threshold rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Single-character code (e.g. `'w'`)
    pub id: char,
    /// Filter rank
    pub rank: u8,
    /// Display name (e.g. `"warning"`)
    pub name: &'static str,
    /// Channel used when a message at this level is emitted
    pub sink: SinkKind,
}

impl Level {
    pub const fn new(id: char, rank: u8, name: &'static str, sink: SinkKind) -> Self {
        Self { id, rank, name, sink }
    }

    /// Whether a message at `self` passes a threshold of `threshold`
    pub fn passes(&self, threshold: &Level) -> bool {
        self.rank <= threshold.rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_kind_parse() {
        assert_eq!(SinkKind::parse("warn"), Some(SinkKind::Warn));
        assert_eq!(SinkKind::parse("DEBUG"), Some(SinkKind::Debug));
        assert_eq!(SinkKind::parse("trace"), None);
        assert_eq!(SinkKind::Log.to_string(), "log");
    }

    #[test]
    fn test_sink_kind_serde() {
        let kind: SinkKind = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(kind, SinkKind::Info);
        assert_eq!(serde_json::to_string(&SinkKind::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn test_level_passes() {
        let error = Level::new('e', 1, "error", SinkKind::Error);
        let info = Level::new('i', 3, "info", SinkKind::Info);

        assert!(error.passes(&info));
        assert!(info.passes(&info));
        assert!(!info.passes(&error));
    }
}
