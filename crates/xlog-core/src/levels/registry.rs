//! Ordered catalog of severity levels

use super::level::{Level, SinkKind};
use crate::error::{XLogError, XLogResult};

/// Threshold used by new loggers when nothing else is configured
pub const DEFAULT_LEVEL: char = 'w';

/// Level substituted when a logging call names an unknown level
pub const FALLBACK_LEVEL: char = 'd';

/// Fixed, ordered set of levels
///
/// Built once (usually via [`LevelRegistry::standard`]) and then shared
/// read-only. Lookups never fail loudly: unknown ids give `None`/`false`.
///
/// # Example
///
/// ```
/// use xlog_core::levels::LevelRegistry;
///
/// let levels = LevelRegistry::standard();
/// assert_eq!(levels.list_levels(), vec!['m', 'e', 'w', 'i', 'd', 'v']);
/// assert_eq!(levels.describe('w'), Some("warning"));
/// assert!(levels.describe('x').is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRegistry {
    levels: Vec<Level>,
}

impl LevelRegistry {
    /// The standard six levels
    pub fn standard() -> Self {
        Self {
            levels: vec![
                Level::new('m', 0, "message", SinkKind::Log),
                Level::new('e', 1, "error", SinkKind::Error),
                Level::new('w', 2, "warning", SinkKind::Warn),
                Level::new('i', 3, "info", SinkKind::Info),
                Level::new('d', 4, "debug", SinkKind::Debug),
                Level::new('v', 5, "verbose", SinkKind::Debug),
            ],
        }
    }

    /// Route one level to a different channel
    ///
    /// Unknown ids are ignored.
    pub fn with_sink(mut self, id: char, sink: SinkKind) -> Self {
        if let Some(level) = self.levels.iter_mut().find(|l| l.id == id) {
            level.sink = sink;
        }
        self
    }

    /// Level ids in definition order
    pub fn list_levels(&self) -> Vec<char> {
        self.levels.iter().map(|l| l.id).collect()
    }

    /// All levels in definition order
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    pub fn is_valid_level(&self, id: char) -> bool {
        self.get(id).is_some()
    }

    /// Display name of a level
    pub fn describe(&self, id: char) -> Option<&'static str> {
        self.get(id).map(|l| l.name)
    }

    pub fn get(&self, id: char) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    pub fn rank(&self, id: char) -> Option<u8> {
        self.get(id).map(|l| l.rank)
    }

    /// Resolve a level from its id or its name (e.g. `"w"` or `"Warning"`)
    pub fn resolve(&self, value: &str) -> Option<char> {
        let value = value.trim();
        let mut chars = value.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if self.is_valid_level(c) {
                return Some(c);
            }
        }
        let lower = value.to_lowercase();
        self.levels.iter().find(|l| l.name == lower).map(|l| l.id)
    }

    /// Like [`resolve`](Self::resolve), keeping the rejected input
    ///
    /// A single unknown character is returned as-is in
    /// [`XLogError::UnknownLevel`]; longer text in
    /// [`XLogError::UnknownLevelName`].
    pub fn parse(&self, value: &str) -> XLogResult<char> {
        if let Some(id) = self.resolve(value) {
            return Ok(id);
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Err(XLogError::UnknownLevel(c)),
            _ => Err(XLogError::UnknownLevelName(value.to_string())),
        }
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let levels = LevelRegistry::standard();
        assert_eq!(levels.list_levels(), vec!['m', 'e', 'w', 'i', 'd', 'v']);

        // Ranks strictly increase in definition order
        let ranks: Vec<u8> = levels.iter().map(|l| l.rank).collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lookups() {
        let levels = LevelRegistry::standard();

        assert!(levels.is_valid_level('i'));
        assert!(!levels.is_valid_level('x'));
        assert_eq!(levels.describe('v'), Some("verbose"));
        assert_eq!(levels.describe('x'), None);
        assert_eq!(levels.rank('m'), Some(0));
        assert_eq!(levels.rank('x'), None);
        assert_eq!(levels.get('e').unwrap().sink, SinkKind::Error);
    }

    #[test]
    fn test_default_routing() {
        let levels = LevelRegistry::standard();
        assert_eq!(levels.get('m').unwrap().sink, SinkKind::Log);
        assert_eq!(levels.get('v').unwrap().sink, SinkKind::Debug);
    }

    #[test]
    fn test_with_sink() {
        let levels = LevelRegistry::standard()
            .with_sink('v', SinkKind::Log)
            .with_sink('x', SinkKind::Error);

        assert_eq!(levels.get('v').unwrap().sink, SinkKind::Log);
        assert_eq!(levels.list_levels().len(), 6);
    }

    #[test]
    fn test_resolve() {
        let levels = LevelRegistry::standard();
        assert_eq!(levels.resolve("w"), Some('w'));
        assert_eq!(levels.resolve("Warning"), Some('w'));
        assert_eq!(levels.resolve(" debug "), Some('d'));
        assert_eq!(levels.resolve("x"), None);
        assert_eq!(levels.resolve("trace"), None);
        assert_eq!(levels.resolve(""), None);
    }

    #[test]
    fn test_parse_keeps_rejected_input() {
        let levels = LevelRegistry::standard();
        assert_eq!(levels.parse("i"), Ok('i'));
        assert_eq!(levels.parse("verbose"), Ok('v'));
        assert_eq!(levels.parse("x"), Err(XLogError::UnknownLevel('x')));
        assert_eq!(levels.parse("trace"), Err(XLogError::UnknownLevelName("trace".to_string())));
        assert_eq!(levels.parse(""), Err(XLogError::UnknownLevelName(String::new())));
    }

    #[test]
    fn test_defaults_are_valid() {
        let levels = LevelRegistry::standard();
        assert!(levels.is_valid_level(DEFAULT_LEVEL));
        assert!(levels.is_valid_level(FALLBACK_LEVEL));
    }
}
